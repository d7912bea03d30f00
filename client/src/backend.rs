use crate::config::ClientConfig;
use crate::payloads::*;
use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use std::path::Path;

pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.backend_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn health(&self) -> Result<HealthResponse> {
        let response = self.client.get(self.url("/health")).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Uploads a policy PDF and returns the session that later questions refer to.
    pub async fn upload_file(&self, path: &Path) -> Result<UploadResponse> {
        validate_pdf_path(path)?;

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "document.pdf".to_string());

        log::info!("Uploading PDF: {}", filename);

        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let part = Part::bytes(bytes)
            .file_name(filename)
            .mime_str("application/pdf")?;
        let form = Form::new().part("file", part);

        let response = self.client
            .post(self.url("/hackrx/upload_file"))
            .multipart(form)
            .send()
            .await?;

        let upload: UploadResponse = check_status(response).await?.json().await?;
        log::info!("Upload accepted, session {}", upload.session_id);
        Ok(upload)
    }

    pub async fn ask(&self, session_id: &str, question: &str) -> Result<AskResponse> {
        log::info!("Asking question in session {}", session_id);

        let response = self.client
            .post(self.url("/hackrx/ask"))
            .json(&AskRequest { session_id, question })
            .send()
            .await?;

        let answer: AskResponse = check_status(response).await?.json().await?;
        log::info!("Received answer with {} references", answer.references.len());
        Ok(answer)
    }

    /// Answers a batch of questions about a PDF hosted at `documents_url`.
    pub async fn run(&self, documents_url: &str, questions: &[String], token: Option<&str>) -> Result<RunResponse> {
        log::info!("Running {} questions against {}", questions.len(), documents_url);

        let mut request = self.client
            .post(self.url("/hackrx/run"))
            .json(&RunRequest {
                documents: documents_url,
                questions,
            });
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let run: RunResponse = check_status(request.send().await?).await?.json().await?;
        if run.answers.len() != questions.len() {
            log::warn!("Asked {} questions but received {} answers", questions.len(), run.answers.len());
        }
        Ok(run)
    }

    pub async fn generate_video(&self, prompt: &str) -> Result<VideoResponse> {
        log::info!("Requesting video generation");

        let response = self.client
            .post(self.url("/hackrx/generate_video"))
            .json(&VideoRequest { prompt })
            .send()
            .await?;

        Ok(check_status(response).await?.json().await?)
    }
}

/// The upload widget only accepts existing `.pdf` files.
pub fn validate_pdf_path(path: &Path) -> Result<()> {
    let is_pdf = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);

    if !is_pdf {
        return Err(anyhow::anyhow!("Only PDF files are supported: {}", path.display()));
    }
    if !path.is_file() {
        return Err(anyhow::anyhow!("File not found: {}", path.display()));
    }

    Ok(())
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await?;
    Err(anyhow::anyhow!("Backend error ({}): {}", status, error_detail(&body)))
}

fn error_detail(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(ErrorResponse { detail: serde_json::Value::String(detail) }) => detail,
        Ok(ErrorResponse { detail }) => detail.to_string(),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_error_detail_string() {
        assert_eq!(
            error_detail(r#"{"detail": "Session not found. Please upload and process the PDF again."}"#),
            "Session not found. Please upload and process the PDF again."
        );
    }

    #[test]
    fn test_error_detail_validation_list() {
        let detail = error_detail(r#"{"detail": [{"loc": ["body", "question"], "msg": "field required"}]}"#);
        assert!(detail.contains("field required"));
    }

    #[test]
    fn test_error_detail_raw_body() {
        assert_eq!(error_detail("Internal Server Error"), "Internal Server Error");
    }

    #[test]
    fn test_validate_pdf_path() {
        let dir = tempfile::tempdir().unwrap();

        let pdf = dir.path().join("policy.PDF");
        std::fs::File::create(&pdf).unwrap().write_all(b"%PDF-1.4").unwrap();
        assert!(validate_pdf_path(&pdf).is_ok());

        let txt = dir.path().join("policy.txt");
        std::fs::File::create(&txt).unwrap();
        let err = validate_pdf_path(&txt).unwrap_err();
        assert!(err.to_string().contains("Only PDF files"));

        let missing = dir.path().join("missing.pdf");
        let err = validate_pdf_path(&missing).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[tokio::test]
    async fn test_upload_rejects_non_pdf_before_network() {
        let config = ClientConfig::from_lookup(|_| None)
            .unwrap()
            .with_backend_url("http://127.0.0.1:9");
        let backend = BackendClient::new(&config).unwrap();

        let file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        let err = backend.upload_file(file.path()).await.unwrap_err();
        assert!(err.to_string().contains("Only PDF files"));
    }

    #[test]
    fn test_url_join() {
        let config = ClientConfig::from_lookup(|_| None)
            .unwrap()
            .with_backend_url("https://qa.example.com/");
        let backend = BackendClient::new(&config).unwrap();
        assert_eq!(backend.url("/hackrx/ask"), "https://qa.example.com/hackrx/ask");
    }
}
