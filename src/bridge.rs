//! Page script bridge.
//!
//! A small script runs inside the webview and reports what only the page
//! can see: scroll and resize events with fresh measurements, animation
//! frames, and intersection reports for reveal elements. Rust decides what
//! to do with them and answers with commands (request a frame, start
//! watching, scroll somewhere).
//!
//! Messages are JSON, tagged by `type` (page -> Rust) and `cmd`
//! (Rust -> page).

use std::time::Duration;

use dioxus::prelude::*;
use folio_core::{
    Debouncer, FolioError, FolioResult, IntersectionEntry, ScrollContext, StaticLayout,
};
use futures::StreamExt;
use serde::{Deserialize, Serialize};

/// Resize events arriving closer together than this are collapsed.
const RESIZE_DEBOUNCE: Duration = Duration::from_millis(150);

const PAGE_SCRIPT: &str = r#"
function measure() {
    const sections = Array.from(document.querySelectorAll('.section')).map(s => ({
        id: s.id,
        top: s.offsetTop,
        height: s.offsetHeight,
    }));
    return {
        scroll_y: window.pageYOffset,
        viewport_height: window.innerHeight,
        document_height: document.documentElement.scrollHeight,
        sections,
    };
}

window.addEventListener('scroll', () => {
    dioxus.send({ type: 'scroll', layout: measure() });
}, { passive: true });

window.addEventListener('resize', () => {
    dioxus.send({ type: 'resize', layout: measure() });
});

let observer = null;
dioxus.send({ type: 'ready', layout: measure() });

function run(cmd) {
    if (cmd.cmd === 'request_frame') {
        window.requestAnimationFrame(() => {
            dioxus.send({ type: 'frame', layout: measure() });
        });
    } else if (cmd.cmd === 'observe') {
        if (observer) observer.disconnect();
        observer = new IntersectionObserver((entries) => {
            dioxus.send({
                type: 'intersect',
                entries: entries.map(e => ({
                    id: e.target.dataset.revealId,
                    is_intersecting: e.isIntersecting,
                    ratio: e.intersectionRatio,
                })),
            });
        }, { threshold: cmd.threshold, rootMargin: cmd.root_margin });
        document.querySelectorAll('[data-aos]').forEach(el => observer.observe(el));
    } else if (cmd.cmd === 'scroll_to') {
        window.scrollTo({ top: cmd.top, behavior: 'smooth' });
    }
}

while (true) {
    const cmd = await dioxus.recv();
    try {
        run(cmd);
    } catch (err) {
        dioxus.send({ type: 'command_failed', cmd: String(cmd.cmd), reason: String(err) });
    }
}
"#;

/// Message from the page script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEvent {
    Ready { layout: StaticLayout },
    Scroll { layout: StaticLayout },
    Frame { layout: StaticLayout },
    Resize { layout: StaticLayout },
    Intersect { entries: Vec<IntersectionEntry> },
    /// A command threw inside the page; the script keeps running.
    CommandFailed { cmd: String, reason: String },
}

/// Command for the page script.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PageCommand {
    RequestFrame,
    Observe { threshold: f64, root_margin: String },
    ScrollTo { top: f64 },
}

pub fn parse_event(value: serde_json::Value) -> FolioResult<PageEvent> {
    serde_json::from_value(value).map_err(|e| FolioError::Bridge(e.to_string()))
}

/// What the bridge loop must do after an event was applied.
#[derive(Debug, Default, PartialEq)]
pub struct Reaction {
    /// New measurements to publish.
    pub layout: Option<StaticLayout>,
    /// Commands to send back to the page.
    pub commands: Vec<PageCommand>,
    /// Measurements to hand to the resize debouncer.
    pub resized: Option<StaticLayout>,
}

/// Apply one page event to the scroll context.
pub fn react(ctx: &mut ScrollContext, event: PageEvent) -> Reaction {
    match event {
        PageEvent::Ready { layout } => {
            ctx.initialize(&layout);
            let options = ctx.reveal_options();
            Reaction {
                layout: Some(layout),
                commands: vec![PageCommand::Observe {
                    threshold: options.threshold,
                    root_margin: options.root_margin(),
                }],
                resized: None,
            }
        }
        PageEvent::Scroll { layout } => {
            let effects = ctx.on_scroll(&layout);
            let commands = if effects.frame_requested {
                vec![PageCommand::RequestFrame]
            } else {
                Vec::new()
            };
            Reaction {
                layout: Some(layout),
                commands,
                resized: None,
            }
        }
        PageEvent::Frame { layout } => {
            ctx.run_frame(&layout);
            Reaction {
                layout: Some(layout),
                ..Default::default()
            }
        }
        PageEvent::Resize { layout } => Reaction {
            resized: Some(layout),
            ..Default::default()
        },
        PageEvent::Intersect { entries } => {
            ctx.apply_intersections(&entries);
            Reaction::default()
        }
        PageEvent::CommandFailed { cmd, reason } => {
            tracing::warn!(cmd = %cmd, "Page command failed: {}", reason);
            if cmd == "request_frame" {
                ctx.cancel_frame();
            }
            Reaction::default()
        }
    }
}

/// Undo the bookkeeping of a command that never reached the page.
///
/// A lost frame request would otherwise leave the frame gate closed and
/// parallax frozen.
pub fn command_undelivered(ctx: &mut ScrollContext, cmd: &PageCommand) {
    if *cmd == PageCommand::RequestFrame {
        ctx.cancel_frame();
    }
}

enum Incoming {
    Command(PageCommand),
    Resized(StaticLayout),
    Page(Result<serde_json::Value, String>),
}

/// Start the page script and pump its events into the scroll context.
///
/// Components send [`PageCommand`]s through the returned coroutine handle.
pub fn use_page_bridge(
    mut ctx: Signal<ScrollContext>,
    mut layout: Signal<StaticLayout>,
) -> Coroutine<PageCommand> {
    use_coroutine(move |mut commands: UnboundedReceiver<PageCommand>| async move {
        let mut eval = document::eval(PAGE_SCRIPT);

        let (resize_tx, mut resize_rx) = tokio::sync::mpsc::unbounded_channel::<StaticLayout>();
        let debouncer = Debouncer::new(RESIZE_DEBOUNCE, move |measured: StaticLayout| {
            let _ = resize_tx.send(measured);
        });

        loop {
            let incoming = tokio::select! {
                Some(cmd) = commands.next() => Incoming::Command(cmd),
                Some(measured) = resize_rx.recv() => Incoming::Resized(measured),
                received = eval.recv::<serde_json::Value>() => {
                    Incoming::Page(received.map_err(|e| format!("{e:?}")))
                }
            };

            match incoming {
                Incoming::Command(cmd) => {
                    if send_command(&eval, &cmd).is_err() {
                        command_undelivered(&mut ctx.write(), &cmd);
                    }
                }
                Incoming::Resized(measured) => {
                    tracing::debug!(viewport = measured.viewport_height, "Page re-measured");
                    ctx.write().refresh(&measured);
                    layout.set(measured);
                }
                Incoming::Page(Ok(value)) => {
                    let event = match parse_event(value) {
                        Ok(event) => event,
                        Err(e) => {
                            tracing::warn!("Ignoring page message: {}", e);
                            continue;
                        }
                    };
                    let reaction = react(&mut ctx.write(), event);
                    if let Some(measured) = reaction.layout {
                        layout.set(measured);
                    }
                    if let Some(measured) = reaction.resized {
                        debouncer.call(measured);
                    }
                    for cmd in reaction.commands {
                        if send_command(&eval, &cmd).is_err() {
                            command_undelivered(&mut ctx.write(), &cmd);
                        }
                    }
                }
                Incoming::Page(Err(e)) => {
                    tracing::error!("Page bridge closed: {}", e);
                    break;
                }
            }
        }
    })
}

fn send_command(eval: &document::Eval, cmd: &PageCommand) -> FolioResult<()> {
    let value = serde_json::to_value(cmd).map_err(|e| {
        tracing::error!("Failed to encode page command {:?}: {}", cmd, e);
        FolioError::from(e)
    })?;
    eval.send(value).map_err(|e| {
        tracing::warn!("Failed to send page command {:?}: {:?}", cmd, e);
        FolioError::Bridge(format!("{e:?}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::build_scroll_context;
    use folio_core::{SectionBounds, SiteSettings};

    fn layout(scroll_y: f64) -> StaticLayout {
        StaticLayout::new(
            800.0,
            vec![
                SectionBounds::new("home", 0.0, 900.0),
                SectionBounds::new("about", 900.0, 800.0),
            ],
        )
        .scrolled_to(scroll_y)
    }

    #[test]
    fn parses_tagged_page_messages() {
        let value = serde_json::json!({
            "type": "intersect",
            "entries": [{ "id": "project-0", "is_intersecting": true, "ratio": 0.25 }]
        });
        match parse_event(value).unwrap() {
            PageEvent::Intersect { entries } => assert_eq!(entries[0].id, "project-0"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn unknown_message_is_a_bridge_error() {
        let err = parse_event(serde_json::json!({ "type": "wobble" })).unwrap_err();
        assert!(matches!(err, FolioError::Bridge(_)));
    }

    #[test]
    fn commands_encode_with_cmd_tag() {
        let value = serde_json::to_value(PageCommand::ScrollTo { top: 830.0 }).unwrap();
        assert_eq!(value, serde_json::json!({ "cmd": "scroll_to", "top": 830.0 }));
        let value = serde_json::to_value(PageCommand::RequestFrame).unwrap();
        assert_eq!(value, serde_json::json!({ "cmd": "request_frame" }));
    }

    #[test]
    fn ready_starts_reveal_watch() {
        let mut ctx = build_scroll_context(SiteSettings::default());
        let reaction = react(&mut ctx, PageEvent::Ready { layout: layout(0.0) });
        assert_eq!(
            reaction.commands,
            vec![PageCommand::Observe {
                threshold: 0.1,
                root_margin: "0px 0px -50px 0px".to_string()
            }]
        );
        assert_eq!(ctx.parallax.applied_offset("home-bg"), Some(0.0));
    }

    #[test]
    fn scroll_burst_asks_for_one_frame() {
        let mut ctx = build_scroll_context(SiteSettings::default());
        let first = react(&mut ctx, PageEvent::Scroll { layout: layout(10.0) });
        let second = react(&mut ctx, PageEvent::Scroll { layout: layout(20.0) });
        assert_eq!(first.commands, vec![PageCommand::RequestFrame]);
        assert!(second.commands.is_empty());

        react(&mut ctx, PageEvent::Frame { layout: layout(20.0) });
        assert_eq!(ctx.parallax.applied_offset("home-bg"), Some(-10.0));
        let third = react(&mut ctx, PageEvent::Scroll { layout: layout(30.0) });
        assert_eq!(third.commands, vec![PageCommand::RequestFrame]);
    }

    #[test]
    fn lost_frame_request_reopens_the_gate() {
        let mut ctx = build_scroll_context(SiteSettings::default());
        let first = react(&mut ctx, PageEvent::Scroll { layout: layout(10.0) });
        assert_eq!(first.commands, vec![PageCommand::RequestFrame]);

        command_undelivered(&mut ctx, &PageCommand::RequestFrame);
        assert!(!ctx.frame_pending());
        let next = react(&mut ctx, PageEvent::Scroll { layout: layout(20.0) });
        assert_eq!(next.commands, vec![PageCommand::RequestFrame]);
    }

    #[test]
    fn failed_page_command_keeps_bridge_usable() {
        let mut ctx = build_scroll_context(SiteSettings::default());
        react(&mut ctx, PageEvent::Scroll { layout: layout(10.0) });
        let value = serde_json::json!({
            "type": "command_failed",
            "cmd": "request_frame",
            "reason": "TypeError"
        });
        let reaction = react(&mut ctx, parse_event(value).unwrap());
        assert_eq!(reaction, Reaction::default());
        assert!(!ctx.frame_pending());

        // An observer failure leaves a pending frame alone
        react(&mut ctx, PageEvent::Scroll { layout: layout(20.0) });
        react(
            &mut ctx,
            PageEvent::CommandFailed { cmd: "observe".into(), reason: "SyntaxError".into() },
        );
        assert!(ctx.frame_pending());
    }

    #[test]
    fn resize_is_deferred_to_debouncer() {
        let mut ctx = build_scroll_context(SiteSettings::default());
        let reaction = react(&mut ctx, PageEvent::Resize { layout: layout(0.0) });
        assert!(reaction.layout.is_none());
        assert_eq!(reaction.resized, Some(layout(0.0)));
    }
}
