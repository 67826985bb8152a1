use super::MetricsSnapshot;

pub fn generate_report(snapshot: &MetricsSnapshot) -> String {
    if snapshot.readings_processed == 0 {
        return "No readings processed".to_string();
    }

    let mut report = String::from("=== Rhythm Metrics ===\n");
    report.push_str(&format!(
        "  Readings: {}\n  Avg Latency: {}μs\n",
        snapshot.readings_processed, snapshot.avg_latency_us
    ));

    for (kind, count) in snapshot.counts.iter().filter(|(_, count)| *count > 0) {
        let share = *count as f64 / snapshot.readings_processed as f64 * 100.0;
        report.push_str(&format!("  {:<12} {:>6} ({:.1}%)\n", kind.as_str(), count, share));
    }

    report
}
