use crate::errors::ApiError;
use crate::use_case_app_container::UseCaseAppContainer;
use actix_web::http::header::{
    Charset, ContentDisposition, DispositionParam, DispositionType, ExtendedValue,
};
use actix_web::{web, HttpResponse};
use anyhow::Context;
use bytes::Bytes;
use futures::Stream;
use std::pin::Pin;
use std::task::{Context as TaskContext, Poll};
use tokio::fs::File;
use tokio_util::io::ReaderStream;
use use_cases::contacts::document::RenderedDocument;
use use_cases::contacts::download_contact::DownloadableDocument;

/// Response body that owns the rendered document, so the file outlives the transfer
/// and is removed once the body is dropped.
pub(crate) struct DocumentStream {
    inner: ReaderStream<File>,
    _document: RenderedDocument,
}

impl DocumentStream {
    pub(crate) async fn open(document: RenderedDocument) -> anyhow::Result<Self> {
        let file = File::open(document.path())
            .await
            .with_context(|| format!("Failed to open {}", document.path().display()))?;
        Ok(Self {
            inner: ReaderStream::new(file),
            _document: document,
        })
    }
}

impl Stream for DocumentStream {
    type Item = Result<Bytes, std::io::Error>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut TaskContext<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}

/// `attachment` disposition with an ASCII `filename` and, for other names, a UTF-8 `filename*`.
fn attachment(file_name: &str) -> ContentDisposition {
    let file_name: String = file_name.chars().filter(|c| !c.is_control()).collect();
    let fallback: String = file_name
        .chars()
        .map(|c| if c.is_ascii() && c != '"' && c != '\\' { c } else { '_' })
        .collect();

    let mut parameters = vec![DispositionParam::Filename(fallback)];
    if !file_name.is_ascii() {
        parameters.push(DispositionParam::FilenameExt(ExtendedValue {
            charset: Charset::Ext("UTF-8".to_owned()),
            language_tag: None,
            value: file_name.into_bytes(),
        }));
    }

    ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters,
    }
}

#[tracing::instrument(err, skip(app), level = "info")]
pub(super) async fn download_contact(
    id: web::Path<String>,
    app: web::Data<UseCaseAppContainer>,
) -> Result<HttpResponse, ApiError> {
    let DownloadableDocument {
        file_name,
        document,
    } = app.get_client().download_contact().download(&id).await?;

    let body = DocumentStream::open(document).await?;

    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header(attachment(&file_name))
        .streaming(body))
}
