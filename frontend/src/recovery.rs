//! Last-resort handling for panics in the UI tree.
//!
//! After a panic the wasm instance can't be trusted to run more Rust, so the
//! recovery screen is plain markup with inline handlers.

use std::panic::PanicInfo;

use crate::reporting::{ReportEvent, ReportSink, WindowSink};

const RECOVERY_MARKUP: &str = r#"
<div style="min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #1a1a1a; color: #fff; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; padding: 2rem;">
    <div style="max-width: 480px; text-align: center; background: rgba(30, 30, 30, 0.7); border: 1px solid rgba(30, 144, 255, 0.1); border-radius: 16px; padding: 3rem;">
        <h1 style="font-size: 1.8rem; margin-bottom: 1rem;">Something went wrong</h1>
        <p style="color: #999; line-height: 1.6; margin-bottom: 2rem;">The page hit an unexpected error. Reloading usually fixes it. If it keeps happening, clear the site's saved data and start over.</p>
        <button onclick="window.location.reload()" style="background: #1E90FF; color: #fff; border: none; border-radius: 8px; padding: 0.8rem 1.6rem; font-size: 1rem; cursor: pointer; margin: 0.3rem;">Reload</button>
        <button onclick="try { window.localStorage.clear(); window.sessionStorage.clear(); } catch (e) {} window.location.href = '/';" style="background: transparent; color: #7EB2FF; border: 1px solid #7EB2FF; border-radius: 8px; padding: 0.8rem 1.6rem; font-size: 1rem; cursor: pointer; margin: 0.3rem;">Clear data and restart</button>
    </div>
</div>
"#;

/// Panic hook type accepted by the renderer.
pub type PanicHook = Box<dyn Fn(&PanicInfo<'_>) + Send + Sync + 'static>;

/// Installs the panic hook: log to the console, report, then swap the page
/// for the recovery screen. Registered through yew so the renderer keeps it
/// instead of installing its own default.
pub fn install() {
    yew::set_custom_panic_hook(recovery_hook(WindowSink, show_recovery_screen));
}

fn recovery_hook<S, F>(sink: S, show_screen: F) -> PanicHook
where
    S: ReportSink + Send + Sync + 'static,
    F: Fn() + Send + Sync + 'static,
{
    Box::new(move |info: &PanicInfo<'_>| {
        console_error_panic_hook::hook(info);

        let location = info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()));
        sink.report(&ReportEvent::Error {
            message: panic_message(info.payload()),
            location,
        });

        show_screen();
    })
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

fn show_recovery_screen() {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        body.set_inner_html(RECOVERY_MARKUP);
    }
}
