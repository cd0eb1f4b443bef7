use crate::probe::prelude::*;

pub const REPORT_HEADER: &str = "Probe results:";

/// Format one report line. Loss is only shown for probes that connected.
pub fn format_result(result: &ProbeResult) -> String {
    match result.address {
        None => format!("Probe {}: No response", result.sequence),
        Some(address) if result.success => format!(
            "Probe {}: Address: {}, Loss: {:.6}%",
            result.sequence,
            address,
            result.loss * 100.0
        ),
        Some(address) => format!(
            "Probe {}: Address: {}, Connection failed",
            result.sequence, address
        ),
    }
}

pub fn print_report(results: &[ProbeResult]) {
    println!("{REPORT_HEADER}");
    for result in results {
        println!("{}", format_result(result));
    }
}
