// Main module for the LocaleNumberFormat service: the NumberFormatEngine
// struct, its trait impl, and one submodule per RPC handler.
use super::{
    EditRequest, EditResponse, FormatRequest, FormatResponse, ListLocalesRequest, LocaleInfo,
    LocaleNumberFormat, ParseRequest, ParseResponse, PasteRequest, PasteResponse,
    SeparatorsRequest, SeparatorsResponse, ValidateRequest, ValidateResponse,
};
use crate::config::EngineSettings;
use crate::error::EngineError;
use crate::format::SeparatorResolver;
use std::sync::Arc;
use tokio_stream::wrappers::ReceiverStream;
use tonic::{Request, Response, Status};

pub mod apply_edit;
pub mod convert_value;
pub mod helpers;
pub mod list_locales;
pub mod resolve_separators;
pub mod validate_value;

pub struct NumberFormatEngine {
    resolver: Arc<SeparatorResolver>,
    default_locale: String,
}

impl NumberFormatEngine {
    pub fn new(resolver: Arc<SeparatorResolver>, default_locale: impl Into<String>) -> Self {
        NumberFormatEngine {
            resolver,
            default_locale: default_locale.into(),
        }
    }

    pub fn from_settings(settings: &EngineSettings) -> Result<Self, EngineError> {
        let resolver = Arc::new(SeparatorResolver::from_settings(settings)?);
        Ok(Self::new(resolver, settings.default_locale.clone()))
    }

    pub fn resolver(&self) -> &Arc<SeparatorResolver> {
        &self.resolver
    }
}

#[tonic::async_trait]
impl LocaleNumberFormat for NumberFormatEngine {
    async fn get_separators(&self, request: Request<SeparatorsRequest>) -> Result<Response<SeparatorsResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(locale = %req_payload.locale, "Received GetSeparatorsRequest, dispatching to handler.");
        resolve_separators::handle_get_separators(req_payload, &self.resolver, &self.default_locale)
    }

    async fn format_value(&self, request: Request<FormatRequest>) -> Result<Response<FormatResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(
            locale = %req_payload.locale,
            canonical = %req_payload.canonical,
            "Received FormatRequest, dispatching to handler."
        );
        convert_value::handle_format_value(req_payload, &self.resolver, &self.default_locale)
    }

    async fn parse_display(&self, request: Request<ParseRequest>) -> Result<Response<ParseResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(
            locale = %req_payload.locale,
            display = %req_payload.display,
            "Received ParseRequest, dispatching to handler."
        );
        convert_value::handle_parse_display(req_payload, &self.resolver, &self.default_locale)
    }

    async fn apply_edit(&self, request: Request<EditRequest>) -> Result<Response<EditResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(
            locale = %req_payload.locale,
            raw = %req_payload.raw,
            cursor = req_payload.cursor,
            "Received EditRequest, dispatching to handler."
        );
        apply_edit::handle_apply_edit(req_payload, &self.resolver, &self.default_locale)
    }

    async fn extract_paste(&self, request: Request<PasteRequest>) -> Result<Response<PasteResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(locale = %req_payload.locale, "Received PasteRequest, dispatching to handler.");
        apply_edit::handle_extract_paste(req_payload, &self.resolver, &self.default_locale)
    }

    async fn validate_value(&self, request: Request<ValidateRequest>) -> Result<Response<ValidateResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(
            canonical = %req_payload.canonical,
            required = req_payload.required,
            min = ?req_payload.min,
            max = ?req_payload.max,
            integer_only = req_payload.integer_only,
            "Received ValidateRequest, dispatching to handler."
        );
        validate_value::handle_validate_value(req_payload)
    }

    type ListLocalesStream = ReceiverStream<Result<LocaleInfo, Status>>;
    async fn list_locales(&self, _request: Request<ListLocalesRequest>) -> Result<Response<Self::ListLocalesStream>, Status> {
        tracing::info!("Received ListLocalesRequest, dispatching to handler.");
        list_locales::handle_list_locales(self.resolver.clone()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LocaleTable;
    use shared::models::Separators;
    use tokio_stream::StreamExt;

    fn create_test_engine() -> NumberFormatEngine {
        NumberFormatEngine::new(Arc::new(SeparatorResolver::default()), "es-CO")
    }

    #[tokio::test]
    async fn test_get_separators() {
        let engine = create_test_engine();
        let request = Request::new(SeparatorsRequest { locale: "en-US".to_string() });
        let response = engine.get_separators(request).await.unwrap().into_inner();
        assert_eq!(response.locale, "en-US");
        assert_eq!(response.thousands, ",");
        assert_eq!(response.decimal, ".");
    }

    #[tokio::test]
    async fn test_empty_locale_uses_default() {
        let engine = create_test_engine();
        let request = Request::new(SeparatorsRequest { locale: String::new() });
        let response = engine.get_separators(request).await.unwrap().into_inner();
        assert_eq!(response.locale, "es-CO");
        assert_eq!(response.thousands, ".");
        assert_eq!(response.decimal, ",");
    }

    #[tokio::test]
    async fn test_format_and_parse() {
        let engine = create_test_engine();
        let request = Request::new(FormatRequest { locale: "es-CO".to_string(), canonical: "1500000.50".to_string() });
        let response = engine.format_value(request).await.unwrap().into_inner();
        assert_eq!(response.display, "1.500.000,50");

        let request = Request::new(ParseRequest { locale: "es-CO".to_string(), display: response.display });
        let response = engine.parse_display(request).await.unwrap().into_inner();
        assert_eq!(response.canonical, "1500000.50");
    }

    #[tokio::test]
    async fn test_apply_edit_reports_cursor() {
        let engine = create_test_engine();
        let request = Request::new(EditRequest { locale: "en-US".to_string(), raw: "9150".to_string(), cursor: 1 });
        let response = engine.apply_edit(request).await.unwrap().into_inner();
        assert_eq!(response.canonical, "9150");
        assert_eq!(response.display, "9,150");
        assert_eq!(response.cursor, 1);
        assert_eq!(response.digits_before_cursor, 1);
        assert!(!response.after_decimal);
    }

    #[tokio::test]
    async fn test_apply_edit_cursor_past_end() {
        let engine = create_test_engine();
        let request = Request::new(EditRequest { locale: "es-CO".to_string(), raw: "12".to_string(), cursor: 3 });
        let status = engine.apply_edit(request).await.unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
        assert!(status.message().contains("past the end"));
    }

    #[tokio::test]
    async fn test_extract_paste() {
        let engine = create_test_engine();
        let request = Request::new(PasteRequest { locale: "en-US".to_string(), text: "$1,234 COP".to_string() });
        let response = engine.extract_paste(request).await.unwrap().into_inner();
        assert!(response.accepted);
        assert_eq!(response.canonical, "1234");

        let request = Request::new(PasteRequest { locale: "en-US".to_string(), text: "n/a".to_string() });
        let response = engine.extract_paste(request).await.unwrap().into_inner();
        assert!(!response.accepted);
        assert!(response.canonical.is_empty());
    }

    #[tokio::test]
    async fn test_validate_value() {
        let engine = create_test_engine();
        let request = Request::new(ValidateRequest {
            canonical: "12.5".to_string(),
            required: true,
            min: Some(1.0),
            max: None,
            integer_only: true,
        });
        let response = engine.validate_value(request).await.unwrap().into_inner();
        assert!(!response.valid);
        assert_eq!(response.message, "12.5 must be a whole number");
        assert_eq!(response.value, None);

        let request = Request::new(ValidateRequest {
            canonical: "1500.".to_string(),
            required: true,
            min: None,
            max: Some(2000.0),
            integer_only: false,
        });
        let response = engine.validate_value(request).await.unwrap().into_inner();
        assert!(response.valid);
        assert_eq!(response.value, Some(1500.0));
    }

    #[tokio::test]
    async fn test_list_locales_streams_table_in_order() {
        let table = LocaleTable::from_reader("locale;label;currency;thousands;decimal\nes-CO;Colombia;COP;.;,\nen-US;US;USD;,;.".as_bytes()).unwrap();
        let engine = NumberFormatEngine::new(Arc::new(SeparatorResolver::new(table, Separators::DOT_COMMA)), "es-CO");
        let mut stream = engine.list_locales(Request::new(ListLocalesRequest {})).await.unwrap().into_inner();

        let mut ids = Vec::new();
        while let Some(item) = stream.next().await {
            let info = item.unwrap();
            ids.push(info.id);
        }
        assert_eq!(ids, vec!["es-CO".to_string(), "en-US".to_string()]);
    }

    #[test]
    fn test_from_settings_with_missing_table_file() {
        let settings = EngineSettings {
            locale_table_path: Some("no/such/locales.csv".to_string()),
            ..EngineSettings::default()
        };
        let result = NumberFormatEngine::from_settings(&settings);
        assert!(matches!(result, Err(EngineError::IoError { .. })));
    }
}
