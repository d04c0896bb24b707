use super::*;
use crate::clipboard::Clipboard;
use crate::constants::{
    COPIED_LABEL, COPY_LABEL, CUSTOM_PROMPT_KEY, CUSTOM_PROMPT_PLACEHOLDER, NO_RESULTS_NOTICE,
};
use crate::proxy::{ProxyError, Transport};
use crate::request::{GenerationRequest, ValidationError};
use crate::store::MemoryStore;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Transport that replays one canned response and records what it was sent.
struct FakeProxy {
    response: Result<Value, String>,
    calls: AtomicUsize,
    last: Mutex<Option<GenerationRequest>>,
}

impl FakeProxy {
    fn ok(body: Value) -> Self {
        Self {
            response: Ok(body),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for FakeProxy {
    async fn send(&self, request: &GenerationRequest) -> Result<Value, ProxyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(request.clone());
        match &self.response {
            Ok(body) => Ok(body.clone()),
            Err(message) => Err(ProxyError::Server {
                status: 500,
                message: message.clone(),
            }),
        }
    }
}

#[derive(Default)]
struct RecordingClipboard {
    copied: Vec<String>,
    fail: bool,
}

impl Clipboard for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("no display");
        }
        self.copied.push(text.to_string());
        Ok(())
    }
}

fn defaults() -> StudioDefaults {
    StudioDefaults {
        provider: ProviderKind::OpenAI,
        model: "gpt-4o".into(),
        template: "default",
        count: 3,
    }
}

fn openai_body(text: &str) -> Value {
    json!({"choices": [{"message": {"role": "assistant", "content": text}}]})
}

static CATALOG: Catalog = Catalog;

fn studio() -> Studio<'static, MemoryStore> {
    Studio::new(&CATALOG, MemoryStore::default(), &defaults())
}

#[test]
fn test_initial_state() {
    let studio = studio();
    assert_eq!(studio.form().models(), CATALOG.models_for(ProviderKind::OpenAI));
    assert_eq!(studio.form().model(), "gpt-4o");
    assert_eq!(
        studio.form().system_prompt(),
        CATALOG.template_text("default").unwrap()
    );
    assert!(!studio.form().prompt_editable());
    assert_eq!(studio.form().count, "3");
    assert_eq!(studio.phase(), Phase::Idle);
    assert_eq!(studio.results(), &ResultView::Idle);
}

#[test]
fn test_default_model_is_selected() {
    let mut d = defaults();
    d.model = "gpt-3.5-turbo".into();
    let studio = Studio::new(&CATALOG, MemoryStore::default(), &d);
    assert_eq!(studio.form().model(), "gpt-3.5-turbo");
    assert_eq!(studio.form().model_index(), 2);
}

#[test]
fn test_model_options_match_catalog_for_every_provider() {
    let mut studio = studio();
    for provider in ProviderKind::ALL {
        studio.on_provider_change(*provider);
        assert_eq!(studio.form().provider(), *provider);
        assert_eq!(studio.form().models(), CATALOG.models_for(*provider));
        assert_eq!(studio.form().model(), CATALOG.models_for(*provider)[0]);
    }
}

#[test]
fn test_cycle_model_wraps() {
    let mut studio = studio();
    studio.cycle_model(-1);
    assert_eq!(studio.form().model(), "gpt-3.5-turbo");
    studio.cycle_model(1);
    assert_eq!(studio.form().model(), "gpt-4o");
}

#[test]
fn test_fixed_templates_are_read_only_catalog_text() {
    let mut studio = studio();
    for id in CATALOG.template_ids() {
        studio.on_template_change(id).unwrap();
        if id == "custom" {
            assert!(studio.form().prompt_editable());
        } else {
            assert!(!studio.form().prompt_editable());
            assert_eq!(studio.form().system_prompt(), CATALOG.template_text(id).unwrap());
        }
    }
}

#[test]
fn test_custom_template_loads_placeholder_then_saved_text() {
    let mut studio = studio();
    studio.on_template_change("custom").unwrap();
    assert_eq!(studio.form().system_prompt(), CUSTOM_PROMPT_PLACEHOLDER);

    assert!(studio.on_prompt_edit("moody noir stills".into()));
    studio.on_template_change("artistic").unwrap();
    studio.on_template_change("custom").unwrap();
    assert_eq!(studio.form().system_prompt(), "moody noir stills");
}

#[test]
fn test_every_custom_edit_is_persisted() {
    let mut studio = studio();
    studio.on_template_change("custom").unwrap();
    studio.on_prompt_edit("a".into());
    studio.on_prompt_edit("ab".into());
    assert_eq!(studio.store().writes, 2);
    assert_eq!(
        studio.store().values.get(CUSTOM_PROMPT_KEY).map(String::as_str),
        Some("ab")
    );
}

#[test]
fn test_edits_rejected_for_fixed_template() {
    let mut studio = studio();
    assert!(!studio.on_prompt_edit("hijack".into()));
    assert_eq!(
        studio.form().system_prompt(),
        CATALOG.template_text("default").unwrap()
    );
    studio.persist_custom_prompt("ignored").unwrap();
    assert_eq!(studio.store().writes, 0);
}

#[test]
fn test_unknown_template_is_rejected() {
    let mut studio = studio();
    assert!(studio.on_template_change("noir").is_err());
    assert_eq!(studio.form().template(), "default");
}

#[test]
fn test_cycle_template_reaches_custom_and_wraps() {
    let mut studio = studio();
    studio.cycle_template(-1);
    assert_eq!(studio.form().template(), "custom");
    assert!(studio.form().prompt_editable());
    studio.cycle_template(1);
    assert_eq!(studio.form().template(), "default");
}

#[tokio::test]
async fn test_successful_cycle_renders_prompts() {
    let proxy = FakeProxy::ok(openai_body("1. A\n2. B\n3. C"));
    let mut studio = studio();
    studio.form_mut().keyword = "  lighthouse ".into();

    studio.submit(&proxy).await.unwrap();

    assert_eq!(proxy.calls(), 1);
    let sent = proxy.last.lock().unwrap().clone().unwrap();
    assert_eq!(sent.keyword, "lighthouse");
    assert_eq!(sent.model, "gpt-4o");
    assert_eq!(sent.count, 3);

    let texts: Vec<_> = studio.results().items().iter().map(|i| i.text.clone()).collect();
    assert_eq!(texts, ["A", "B", "C"]);
    assert_eq!(studio.phase(), Phase::Idle);
    assert!(studio.control().is_enabled());
}

#[tokio::test]
async fn test_empty_keyword_never_calls_proxy() {
    let proxy = FakeProxy::ok(openai_body("1. A"));
    let mut studio = studio();
    studio.form_mut().keyword = "   ".into();

    let err = studio.submit(&proxy).await.unwrap_err();

    assert_eq!(err, SubmitError::Invalid(ValidationError::EmptyKeyword));
    assert_eq!(proxy.calls(), 0);
    assert_eq!(studio.control().toggles(), (0, 0));
    assert!(studio.control().is_enabled());
    assert_eq!(studio.results(), &ResultView::Idle);
}

#[tokio::test]
async fn test_empty_system_prompt_never_calls_proxy() {
    let proxy = FakeProxy::ok(openai_body("1. A"));
    let mut studio = studio();
    studio.on_template_change("custom").unwrap();
    studio.on_prompt_edit("  ".into());
    studio.form_mut().keyword = "owl".into();

    let err = studio.submit(&proxy).await.unwrap_err();
    assert_eq!(err, SubmitError::Invalid(ValidationError::EmptySystemPrompt));
    assert_eq!(proxy.calls(), 0);
}

#[tokio::test]
async fn test_failed_cycle_shows_error_and_reenables() {
    let proxy = FakeProxy::failing("Invalid API key");
    let mut studio = studio();
    studio.form_mut().keyword = "owl".into();

    studio.submit(&proxy).await.unwrap();

    assert_eq!(
        studio.results(),
        &ResultView::Error("Invalid API key".to_string())
    );
    assert_eq!(studio.control().toggles(), (1, 1));
    assert!(studio.control().is_enabled());
}

#[tokio::test]
async fn test_toggles_balance_across_cycles() {
    let good = FakeProxy::ok(openai_body("just text"));
    let bad = FakeProxy::failing("boom");
    let mut studio = studio();
    studio.form_mut().keyword = "owl".into();

    studio.submit(&good).await.unwrap();
    assert_eq!(
        studio.results(),
        &ResultView::Notice(NO_RESULTS_NOTICE.to_string())
    );
    studio.submit(&bad).await.unwrap();
    studio.submit(&good).await.unwrap();

    let (disables, enables) = studio.control().toggles();
    assert_eq!(disables, 3);
    assert_eq!(enables, disables);
}

#[test]
fn test_split_cycle_blocks_reentry() {
    let mut studio = studio();
    studio.form_mut().keyword = "owl".into();

    studio.begin_submit().unwrap();
    assert_eq!(studio.phase(), Phase::Submitting);
    assert!(!studio.control().is_enabled());
    assert_eq!(studio.results(), &ResultView::Loading);
    assert_eq!(studio.begin_submit().unwrap_err(), SubmitError::Busy);

    studio.finish_submit(Ok("1. only".into()));
    studio.finish_submit(Ok("1. stray".into()));
    assert_eq!(studio.control().toggles(), (1, 1));
    assert_eq!(studio.results().items()[0].text, "only");
}

#[test]
fn test_new_results_replace_old() {
    let mut studio = studio();
    studio.form_mut().keyword = "owl".into();
    studio.begin_submit().unwrap();
    studio.finish_submit(Ok("1. A\n2. B\n3. C".into()));
    studio.begin_submit().unwrap();
    studio.finish_submit(Ok("1. D".into()));
    assert_eq!(studio.results().items().len(), 1);
}

#[test]
fn test_copy_marks_only_that_item() {
    let mut studio = studio();
    studio.form_mut().keyword = "owl".into();
    studio.begin_submit().unwrap();
    studio.finish_submit(Ok("1. A\n2. B".into()));

    let mut clipboard = RecordingClipboard::default();
    let now = Instant::now();
    assert!(studio.copy_result(1, &mut clipboard, now));
    assert_eq!(clipboard.copied, ["B"]);

    let items = studio.results().items();
    assert_eq!(items[0].copy_label(now), COPY_LABEL);
    assert_eq!(items[1].copy_label(now), COPIED_LABEL);
    assert_eq!(items[1].copy_label(now + Duration::from_secs(3)), COPY_LABEL);
}

#[test]
fn test_copy_failure_leaves_state_alone() {
    let mut studio = studio();
    studio.form_mut().keyword = "owl".into();
    studio.begin_submit().unwrap();
    studio.finish_submit(Ok("1. A".into()));

    let mut clipboard = RecordingClipboard {
        fail: true,
        ..Default::default()
    };
    let now = Instant::now();
    assert!(!studio.copy_result(0, &mut clipboard, now));
    assert_eq!(studio.results().items()[0].copy_label(now), COPY_LABEL);
    assert!(!studio.copy_result(7, &mut clipboard, now));
    assert!(studio.control().is_enabled());
}

#[test]
fn test_defaults_from_config() {
    let config = Config {
        default_provider: Some("google".into()),
        default_template: Some("Fantasy".into()),
        default_count: Some(8),
        ..Config::default()
    };
    let d = StudioDefaults::from_config(&config, &CATALOG).unwrap();
    assert_eq!(d.provider, ProviderKind::Google);
    assert_eq!(d.model, "gemini-1.5-pro-latest");
    assert_eq!(d.template, "fantasy");
    assert_eq!(d.count, 8);
}
