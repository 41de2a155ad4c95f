/// Integration tests for the leave list client against a throwaway local
/// HTTP listener. Each listener answers exactly one request and closes.
use leavecal_api::{LeaveSource, LeavesClient};
use leavecal_core::{FETCH_FAILED_MESSAGE, LeaveCalError};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const LEAVES_JSON: &str = r#"[
  {"Employee_Name": "Govindarajan Lakshminarayanan", "Designation": "Manager C&F",
   "From_Date": "2025-11-24", "To_Date": "2025-12-05", "NDays": 12,
   "Total_Managers": 41, "Department": "C&F", "Status": "Pending"},
  {"Employee_Name": "Priya Sharma", "Designation": "HR Manager",
   "From_Date": "2025-12-01", "To_Date": "2025-12-07", "NDays": 7,
   "Total_Managers": 41, "Department": "HR", "Status": "Approved"}
]"#;

/// Serve a single canned response and return the URL to hit
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 4096];
        let mut read = 0;
        // drain the request head before answering
        loop {
            let n = socket.read(&mut buf[read..]).await.unwrap();
            read += n;
            if n == 0 || buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });
    format!("http://{}/api/leaves", addr)
}

fn client(url: &str) -> LeavesClient {
    LeavesClient::new(url, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_fetch_decodes_records() {
    let url = serve_once("200 OK", LEAVES_JSON).await;
    let dataset = client(&url).fetch_leaves().await.unwrap();

    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.total_managers, 41);
    assert_eq!(dataset.records[0].department, "C&F");
    assert_eq!(dataset.records[1].to_date, "2025-12-07");
}

#[tokio::test]
async fn test_fetch_empty_list() {
    let url = serve_once("200 OK", "[]").await;
    let dataset = client(&url).fetch_leaves().await.unwrap();
    assert!(dataset.is_empty());
    assert_eq!(dataset.total_managers, 0);
}

#[tokio::test]
async fn test_non_success_status_is_fetch_failure() {
    let url = serve_once(
        "500 Internal Server Error",
        r#"{"detail": "Database connection failed"}"#,
    )
    .await;
    let err = client(&url).fetch_leaves().await.unwrap_err();
    assert!(matches!(err, LeaveCalError::FetchFailed(ref cause) if cause.contains("500")));
    assert_eq!(err.user_message(), FETCH_FAILED_MESSAGE);
}

#[tokio::test]
async fn test_malformed_json_is_fetch_failure() {
    let url = serve_once("200 OK", r#"[{"Employee_Name": "A"}]"#).await;
    let err = client(&url).fetch_leaves().await.unwrap_err();
    assert!(matches!(err, LeaveCalError::FetchFailed(_)));
    assert_eq!(err.user_message(), FETCH_FAILED_MESSAGE);
}

#[tokio::test]
async fn test_connection_refused_is_fetch_failure() {
    // grab a free port and release it so nothing is listening there
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{}/api/leaves", addr))
        .fetch_leaves()
        .await
        .unwrap_err();
    assert!(matches!(err, LeaveCalError::FetchFailed(_)));
}
