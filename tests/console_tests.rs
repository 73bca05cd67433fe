use saw::{Effect, Level, RecordingEffects, Saw, SawConfig};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

const SEPARATOR: &str = "----------------------------------------------------------------";

fn recording_saw(colors: bool) -> (Saw, Arc<RecordingEffects>) {
    let recorder = Arc::new(RecordingEffects::new());
    let saw = Saw::new()
        .set_config(SawConfig { colors })
        .with_effects(recorder.clone());
    (saw, recorder)
}

fn assert_block_shape(text: &str, level: &str, message: &str) {
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5, "unexpected block: {:?}", text);
    assert_eq!(lines[0], SEPARATOR);
    assert_eq!(lines[1], format!("Log level: {}", level));
    assert_eq!(lines[2], format!("Log message: {}", message));
    assert!(lines[3].starts_with("Log time: "));
    assert_eq!(lines[3].len(), "Log time: HH:MM:SS".len());
    assert_eq!(lines[4], SEPARATOR);
    assert!(text.ends_with('\n'));
}

#[test]
fn test_plain_blocks_for_every_level() {
    let (saw, recorder) = recording_saw(false);
    for level in Level::ALL {
        saw.log(level.as_str(), "plain text");
    }

    let seen = recorder.take();
    assert_eq!(seen.len(), 6);
    for (rendered, level) in seen.iter().zip(Level::ALL) {
        assert_block_shape(&rendered.text, level.as_str(), "plain text");
        assert!(!rendered.text.contains('\x1b'));
    }
}

#[test]
fn test_colored_blocks_contain_escapes() {
    let (saw, recorder) = recording_saw(true);
    saw.info("colored");
    saw.warning("colored");

    let seen = recorder.take();
    assert!(seen[0].text.contains("\x1b[0;32mLog message: colored\x1b[0m"));
    assert!(seen[1].text.contains("\x1b[0;33mLog level: WARNING\x1b[0m"));
    assert!(seen.iter().all(|r| r.effect == Effect::Continue));
}

#[test]
fn test_panic_payload_is_the_rendered_block() {
    let (saw, recorder) = recording_saw(false);
    saw.panic("x");

    let seen = recorder.take();
    match &seen[0].effect {
        Effect::RaiseUnrecoverable(payload) => {
            assert_eq!(payload, &seen[0].text);
            assert!(payload.contains("Log message: x"));
        }
        other => panic!("expected RaiseUnrecoverable, got {:?}", other),
    }
}

#[test]
fn test_console_panic_is_catchable() {
    let saw = Saw::new();
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        saw.panic("x");
    }));

    let payload = result.expect_err("Panic log did not panic");
    let text = payload
        .downcast_ref::<String>()
        .expect("panic payload should be the rendered block");
    assert!(text.contains("x"));
    assert_block_shape(text, "PANIC", "x");
}

#[test]
fn test_concurrent_console_logging_keeps_blocks_intact() {
    let (saw, recorder) = recording_saw(true);
    let threads = 8;
    let per_thread = 100;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let saw = saw.clone();
            thread::spawn(move || {
                for i in 0..per_thread {
                    saw.error(&format!("thread {} line {}", t, i));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let seen = recorder.take();
    assert_eq!(seen.len(), threads * per_thread);
    for rendered in &seen {
        let lines: Vec<&str> = rendered.text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.starts_with("\x1b[0;31m") && l.ends_with("\x1b[0m")));
        assert!(lines[2].contains("Log message: thread "));
        // A leaked scratch buffer would carry a previous block along
        assert_eq!(rendered.text.matches("Log message:").count(), 1);
    }
}
