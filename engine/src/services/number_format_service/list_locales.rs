// Handler for the ListLocales RPC
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tonic::{Response, Status};

use super::helpers::to_locale_info;
use crate::format::SeparatorResolver;
use crate::services::LocaleInfo;

pub async fn handle_list_locales(
    resolver: Arc<SeparatorResolver>,
) -> Result<Response<ReceiverStream<Result<LocaleInfo, Status>>>, Status> {
    let infos: Vec<LocaleInfo> = resolver.locales().iter().map(to_locale_info).collect();
    tracing::debug!(count = infos.len(), "Streaming locale list (handler).");

    let (tx, rx) = mpsc::channel(8);
    tokio::spawn(async move {
        for info in infos {
            if let Err(e) = tx.send(Ok(info)).await {
                tracing::warn!(error = ?e, "Client dropped locale stream (handler)");
                break;
            }
        }
    });

    Ok(Response::new(ReceiverStream::new(rx)))
}
