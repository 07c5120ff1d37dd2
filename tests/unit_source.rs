// Unit tests for source loading.
//
// Remote fetches run against a one-shot HTTP server on localhost; PDFs are
// generated in memory with lopdf. No external network access.

use async_trait::async_trait;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use keysum::source::error::LoadError;
use keysum::source::fetch::{Fetcher, HttpFetcher};
use keysum::source::{classify, load, SourceKind};

// ============================================================
// Helpers
// ============================================================

/// Serve exactly one HTTP response on an ephemeral port. Returns the base URL.
async fn serve_once(status_line: &'static str, content_type: &'static str, body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let header = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        socket.write_all(header.as_bytes()).await.unwrap();
        socket.write_all(&body).await.unwrap();
        let _ = socket.shutdown().await;
    });

    format!("http://{addr}")
}

fn local_fetcher() -> HttpFetcher {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpFetcher::with_client(client)
}

/// Fetcher that must never be called (local and unsupported sources).
struct UnreachableFetcher;

#[async_trait]
impl Fetcher for UnreachableFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, LoadError> {
        panic!("unexpected fetch of {url}");
    }

    async fn fetch_text(&self, url: &str) -> Result<String, LoadError> {
        panic!("unexpected fetch of {url}");
    }
}

/// Build a PDF with one page per entry, each page showing one line of text.
fn make_pdf(pages: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => pages.len() as i64,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

// ============================================================
// Classification and unsupported input
// ============================================================

#[test]
fn https_prefix_counts_as_remote() {
    assert!(matches!(
        classify("https://example.com/a.pdf"),
        SourceKind::RemotePdf(_)
    ));
    assert!(matches!(
        classify("https://example.com/"),
        SourceKind::RemoteHtml(_)
    ));
}

#[tokio::test]
async fn unsupported_local_path_fails_before_any_io() {
    let result = load(&UnreachableFetcher, "notes.txt").await;
    match result {
        Err(LoadError::Unsupported(location)) => assert_eq!(location, "notes.txt"),
        other => panic!("expected Unsupported, got {other:?}"),
    }
}

#[test]
fn load_errors_render_one_line_messages() {
    let err = LoadError::Unsupported("notes.txt".to_string());
    let msg = err.to_string();
    assert!(msg.contains("Unsupported format"));
    assert!(!msg.contains('\n'));
}

// ============================================================
// Remote sources
// ============================================================

#[tokio::test]
async fn remote_pdf_404_is_a_status_error() {
    let base = serve_once("404 Not Found", "text/plain", b"missing".to_vec()).await;
    let url = format!("{base}/paper.pdf");

    let result = load(&local_fetcher(), &url).await;
    match result {
        Err(LoadError::Status { status, url: failed }) => {
            assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
            assert_eq!(failed, url);
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn remote_html_paragraphs_are_joined_in_order() {
    let html = b"<html><body><p>A.</p><p>B.</p><p>C.</p></body></html>".to_vec();
    let base = serve_once("200 OK", "text/html", html).await;

    let text = load(&local_fetcher(), &format!("{base}/article")).await.unwrap();
    assert_eq!(text, "A. B. C.");
}

#[tokio::test]
async fn remote_html_is_decoded_with_declared_charset() {
    // "Café crème." in ISO-8859-1: é = 0xE9, è = 0xE8
    let html = b"<html><body><p>Caf\xe9 cr\xe8me.</p></body></html>".to_vec();
    let base = serve_once("200 OK", "text/html; charset=iso-8859-1", html).await;

    let text = load(&local_fetcher(), &format!("{base}/menu")).await.unwrap();
    assert_eq!(text, "Café crème.");
    assert!(!text.contains('\u{FFFD}'));
}

#[tokio::test]
async fn remote_html_without_text_elements_is_empty() {
    let html = b"<html><body><div>no paragraphs</div></body></html>".to_vec();
    let base = serve_once("200 OK", "text/html", html).await;

    let result = load(&local_fetcher(), &format!("{base}/article")).await;
    assert!(matches!(result, Err(LoadError::Empty)));
}

#[tokio::test]
async fn connection_refused_is_an_http_error() {
    // Bind then drop to get a port with nothing listening
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = load(&local_fetcher(), &format!("http://{addr}/gone.pdf")).await;
    assert!(matches!(result, Err(LoadError::Http { .. })));
}

#[tokio::test]
async fn remote_pdf_is_decoded() {
    let base = serve_once("200 OK", "application/pdf", make_pdf(&["Remote hello"])).await;

    let text = load(&local_fetcher(), &format!("{base}/doc.pdf")).await.unwrap();
    assert!(text.contains("Remote hello"), "got {text:?}");
}

// ============================================================
// Local PDFs
// ============================================================

#[tokio::test]
async fn local_pdf_pages_are_concatenated_in_order() {
    let path = std::env::temp_dir().join("keysum-test-two-pages.pdf");
    std::fs::write(&path, make_pdf(&["First page", "Second page"])).unwrap();

    let text = load(&UnreachableFetcher, path.to_str().unwrap()).await.unwrap();
    let first = text.find("First page").expect("first page text");
    let second = text.find("Second page").expect("second page text");
    assert!(first < second);
    assert!(!text.contains('\n'), "whitespace should be collapsed");

    // Cleanup
    std::fs::remove_file(&path).unwrap();
}

#[tokio::test]
async fn missing_local_pdf_is_not_found() {
    let path = std::env::temp_dir().join("keysum-test-does-not-exist.pdf");
    let result = load(&UnreachableFetcher, path.to_str().unwrap()).await;
    assert!(matches!(result, Err(LoadError::NotFound(_))));
}

#[tokio::test]
async fn corrupt_local_pdf_is_a_pdf_error() {
    let path = std::env::temp_dir().join("keysum-test-corrupt.pdf");
    std::fs::write(&path, b"%PDF-1.5 this is not really a pdf").unwrap();

    let result = load(&UnreachableFetcher, path.to_str().unwrap()).await;
    assert!(matches!(result, Err(LoadError::Pdf(_))));

    std::fs::remove_file(&path).unwrap();
}
