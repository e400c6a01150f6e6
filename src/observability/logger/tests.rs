use super::*;
use std::collections::HashMap;
use tempfile::tempdir;

#[test]
fn test_logger_creation() {
    let temp_dir = tempdir().unwrap();
    let log_path = temp_dir.path().join("test.log");

    let logger = Logger::new(Some(&log_path), Some("debug"));
    assert!(logger.is_ok());

    let logger = logger.unwrap();
    assert_eq!(logger.log_file(), &log_path);
    assert_eq!(logger.log_level(), "DEBUG");
}

#[test]
fn test_log_file_creation() {
    let temp_dir = tempdir().unwrap();
    let log_path = temp_dir.path().join("logs").join("test.md");

    let _logger = Logger::new(Some(&log_path), None).unwrap();
    assert!(log_path.exists());

    let content = std::fs::read_to_string(&log_path).unwrap();
    assert!(content.contains("# Career Compass Conversation Log"));
    assert!(content.contains("Log started:"));
}

#[test]
fn test_conversation_entries() {
    let temp_dir = tempdir().unwrap();
    let log_path = temp_dir.path().join("test.md");
    let logger = Logger::new(Some(&log_path), None).unwrap();

    assert!(logger.log_session_start("panel-1", "gemini").is_ok());
    assert!(logger.log_user_message(2, "How do I write a cover letter?").is_ok());
    assert!(logger.log_fallback("resumeHelp", "network error").is_ok());
    assert!(logger.log_completion("panel closed").is_ok());

    let content = std::fs::read_to_string(&log_path).unwrap();
    assert!(content.contains("Session Started"));
    assert!(content.contains("**Panel:** panel-1"));
    assert!(content.contains("User Message #2"));
    assert!(content.contains("How do I write a cover letter?"));
    assert!(content.contains("**Topic:** resumeHelp"));
    assert!(content.contains("**Reason:** network error"));
    assert!(content.contains("Session Completed"));
}

#[test]
fn test_remote_reply_body_depends_on_level() {
    let temp_dir = tempdir().unwrap();

    let info_path = temp_dir.path().join("info.md");
    let info_logger = Logger::new(Some(&info_path), Some("INFO")).unwrap();
    info_logger.log_remote_reply("gemini", "Learn SQL first.").unwrap();
    let info_content = std::fs::read_to_string(&info_path).unwrap();
    assert!(info_content.contains("Remote Reply"));
    assert!(info_content.contains("16 characters"));
    assert!(!info_content.contains("Learn SQL first."));

    let debug_path = temp_dir.path().join("debug.md");
    let debug_logger = Logger::new(Some(&debug_path), Some("DEBUG")).unwrap();
    debug_logger.log_remote_reply("gemini", "Learn SQL first.").unwrap();
    let debug_content = std::fs::read_to_string(&debug_path).unwrap();
    assert!(debug_content.contains("Learn SQL first."));
}

#[test]
fn test_empty_remote_reply_is_skipped() {
    let temp_dir = tempdir().unwrap();
    let log_path = temp_dir.path().join("test.md");
    let logger = Logger::new(Some(&log_path), None).unwrap();

    logger.log_remote_reply("gemini", "   ").unwrap();

    let content = std::fs::read_to_string(&log_path).unwrap();
    assert!(!content.contains("Remote Reply"));
}

#[test]
fn test_log_error_with_context() {
    let temp_dir = tempdir().unwrap();
    let log_path = temp_dir.path().join("test.md");
    let logger = Logger::new(Some(&log_path), None).unwrap();

    let mut context = HashMap::new();
    context.insert(
        "panel".to_string(),
        serde_json::Value::String("p-42".to_string()),
    );

    logger.log_error("round trip failed", Some(&context)).unwrap();

    let content = std::fs::read_to_string(&log_path).unwrap();
    assert!(content.contains("**Error:** round trip failed"));
    assert!(content.contains("\"panel\": \"p-42\""));
}

#[test]
fn test_existing_log_file_is_not_truncated() {
    let temp_dir = tempdir().unwrap();
    let log_path = temp_dir.path().join("test.md");

    let first = Logger::new(Some(&log_path), None).unwrap();
    first.log_completion("first run").unwrap();

    let _second = Logger::new(Some(&log_path), None).unwrap();
    let content = std::fs::read_to_string(&log_path).unwrap();
    assert!(content.contains("first run"));
    assert_eq!(content.matches("# Career Compass Conversation Log").count(), 1);
}

#[test]
fn test_append_fails_when_directory_is_gone() {
    let temp_dir = tempdir().unwrap();
    let log_dir = temp_dir.path().join("logs");
    let log_path = log_dir.join("test.md");
    let logger = Logger::new(Some(&log_path), None).unwrap();

    std::fs::remove_dir_all(&log_dir).unwrap();
    assert!(logger.log_user_message(1, "hello").is_err());
}
