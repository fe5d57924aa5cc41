//! Plain-text rendering of the core view model.

use checker_core::{AppViewModel, ResultView};

pub fn greeting() {
    println!("URL Safety Checker");
    println!("Enter a URL to check it, or :retry, :copy, :json, :quit.");
    println!();
}

pub fn render(view: &AppViewModel) {
    if view.checking {
        println!("Analyzing URL... this may take a few seconds");
        return;
    }

    if let Some(result) = &view.result {
        render_result(result);
    }

    if let Some(error) = &view.error {
        println!("Error: {error}");
        println!("(:retry to clear and try again)");
    }

    if let Some(notification) = &view.notification {
        println!("* {notification}");
    }
}

fn render_result(result: &ResultView) {
    println!();
    println!("== {} ==", result.status_label);
    println!("{}", result.reason);
    println!("Checked URL: {}", result.checked_url);
    println!();

    println!("Blocklist provider: {}", provider_status(result.blocklist.errored));
    println!("  Threats found: {}", result.blocklist.threats_found);
    if !result.blocklist.threat_types.is_empty() {
        println!("  Threat types: {}", result.blocklist.threat_types);
    }

    println!("Multi-engine provider: {}", provider_status(result.multi_engine.errored));
    let stats = &result.multi_engine.stats;
    println!(
        "  Malicious: {}  Suspicious: {}  Harmless: {}  Undetected: {}",
        stats.malicious, stats.suspicious, stats.harmless, stats.undetected
    );
    println!();
}

fn provider_status(errored: bool) -> &'static str {
    if errored {
        "Error"
    } else {
        "Success"
    }
}
