//! Basic tests for hanzi-api

use async_trait::async_trait;
use hanzi_api::*;
use hanzi_engine::{LexemeIds, LexiconPort, LexiconResult};
use std::sync::Arc;
use std::time::Duration;

fn lexicon() -> Arc<MemoryLexicon> {
    let mut lexicon = MemoryLexicon::new();
    let entries = [
        ("nh", "你好", "你好", "ni3 hao3"),
        ("n", "你", "你", "ni3"),
        ("h", "好", "好", "hao3"),
    ];
    for (id, sc, tc, pinyin) in entries {
        lexicon.insert(Lexeme::new(id, Some(sc), Some(tc), Some(pinyin)).unwrap());
    }
    lexicon.add_to_collection(&CollectionId::new("hsk1"), &LexemeId::new("nh"));
    Arc::new(lexicon)
}

fn processor() -> SegmentProcessor {
    SegmentProcessor::new(lexicon()).unwrap()
}

#[test]
fn test_input_text_processing() {
    let input = Input::from_text("你好");
    assert_eq!(input.read_text().unwrap(), "你好");

    let input = Input::from_reader("谢谢".as_bytes());
    assert_eq!(input.read_text().unwrap(), "谢谢");

    let input = Input::from_file("/nonexistent/hanzi/input.txt");
    assert!(matches!(input.read_text(), Err(ApiError::Io(_))));
}

#[test]
fn test_config_builder() {
    let config = Config::builder()
        .char_limit(20)
        .alignment_mode(AlignmentMode::Strict)
        .timeout(Some(Duration::from_secs(2)))
        .build()
        .unwrap();

    assert_eq!(config.char_limit(), 20);
    assert_eq!(config.alignment_mode(), AlignmentMode::Strict);
    assert_eq!(config.timeout(), Some(Duration::from_secs(2)));

    assert!(matches!(
        Config::builder().char_limit(0).build(),
        Err(ApiError::Config(_))
    ));
    assert!(matches!(
        Config::builder().timeout(Some(Duration::ZERO)).build(),
        Err(ApiError::Config(_))
    ));
}

#[test]
fn test_config_presets() {
    assert_eq!(Config::graceful().alignment_mode(), AlignmentMode::Graceful);
    assert_eq!(Config::strict().alignment_mode(), AlignmentMode::Strict);
    assert_eq!(Config::default().char_limit(), 1000);
}

#[tokio::test]
async fn test_known_word() {
    let segments = processor().get_segments("你好", None, None).await.unwrap();

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].segment, "你好");
    assert_eq!(segments[0].pinyin[0].id, "nh");
    assert_eq!(segments[0].pinyin[0].pinyin.as_deref(), Some("ni3 hao3"));
    assert!(segments[0].is_visible);
    assert!(segments[0].strict_visible);
    assert_eq!(segments[0].romanization().as_deref(), Some("ni3 hao3"));
}

#[tokio::test]
async fn test_request_with_collection_blacklist() {
    let request = SegmentRequest::new("你好").blacklist_collection("hsk1");
    let segments = processor().segment(&request).await.unwrap();

    assert!(!segments[0].is_visible);
    assert!(!segments[0].strict_visible);
}

#[tokio::test]
async fn test_character_limit_is_validation_error() {
    let text = "好".repeat(1001);
    match processor().get_segments(&text, None, None).await {
        Err(ApiError::Validation(error)) => {
            assert_eq!(error, ValidationError::character_limit(1000));
            assert_eq!(error.to_string(), "zh: character limit exceeded (limit: 1000)");
        }
        other => panic!("Expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_custom_limit() {
    let config = Config::builder().char_limit(3).build().unwrap();
    let processor = SegmentProcessor::with_config(lexicon(), config).unwrap();

    let error = processor.get_segments("你好你好", None, None).await.unwrap_err();
    assert!(error.is_validation());
    assert!(processor.get_segments("你好", None, None).await.is_ok());
}

#[tokio::test]
async fn test_lookup() {
    let lexemes = processor().lookup("好").await.unwrap();
    assert_eq!(lexemes.len(), 1);
    assert_eq!(lexemes[0].zh_sc.as_deref(), Some("好"));
}

#[tokio::test]
async fn test_timeout_allows_fast_requests() {
    let config = Config::builder()
        .timeout(Some(Duration::from_secs(30)))
        .build()
        .unwrap();
    let processor = SegmentProcessor::with_config(lexicon(), config).unwrap();
    assert!(processor.get_segments("你好", None, None).await.is_ok());
}

/// Answers every text lookup only after a long pause
struct SlowLexicon(MemoryLexicon);

#[async_trait]
impl LexiconPort for SlowLexicon {
    async fn find_by_text(&self, text: &str) -> LexiconResult<LexemeIds> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        self.0.find_by_text(text).await
    }

    async fn find_by_id(&self, id: &LexemeId) -> LexiconResult<Option<Lexeme>> {
        self.0.find_by_id(id).await
    }

    async fn find_ids_by_collection(&self, collection: &CollectionId) -> LexiconResult<LexemeIds> {
        self.0.find_ids_by_collection(collection).await
    }
}

#[tokio::test]
async fn test_slow_lexicon_times_out() {
    let config = Config::builder()
        .timeout(Some(Duration::from_millis(1)))
        .build()
        .unwrap();
    let lexicon = Arc::new(SlowLexicon(MemoryLexicon::new()));
    let processor = SegmentProcessor::with_config(lexicon, config).unwrap();

    match processor.get_segments("你好", None, None).await {
        Err(ApiError::Timeout { millis }) => assert_eq!(millis, 1),
        other => panic!("Expected Timeout, got {other:?}"),
    }
    assert!(matches!(
        processor.lookup("你好").await,
        Err(ApiError::Timeout { .. })
    ));
}

#[tokio::test]
async fn test_convenience_function() {
    let segments = get_segments(lexicon(), "ABC", None, None).await.unwrap();
    assert_eq!(segments.len(), 1);
    assert!(segments[0].pinyin.is_empty());
    assert!(!segments[0].is_visible);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_json_shape() {
    let segments = processor().get_segments("你好", None, None).await.unwrap();
    let json: serde_json::Value = serde_json::from_str(&to_json(&segments, false).unwrap()).unwrap();

    let first = &json[0];
    assert_eq!(first["segment"], "你好");
    assert_eq!(first["pinyin"][0]["zh_sc"], "你好");
    assert_eq!(first["pinyin"][0]["zh_tc"], "你好");
    assert_eq!(first["is_visible"], true);
    assert_eq!(first["strict_visible"], true);

    let error = serde_json::to_value(ValidationError::character_limit(1000)).unwrap();
    assert_eq!(
        error,
        serde_json::json!({"field": "zh", "reason": "character limit exceeded", "limit": 1000})
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_request_deserializes_without_blacklist() {
    let request: SegmentRequest = serde_json::from_str(r#"{"zh": "你好"}"#).unwrap();
    assert_eq!(request, SegmentRequest::new("你好"));
}
