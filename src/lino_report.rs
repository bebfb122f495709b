//! Links Notation (Lino) Report Generator
//!
//! Benchmark runs can be saved in Links Notation, a small indentation-based
//! format of `name value` links, and rendered to Markdown.
//!
//! Format example:
//!
//! ```text
//! results:
//!   size_1024:
//!     cpu_radix:
//!       time_ms 0.031
//!       verified true
//!       radix_bits 4
//! ```

use std::fmt::Write;
use std::fs;
use std::io;
use std::path::Path;

/// Single-threaded comparison sort (`sort_unstable`).
pub const CPU_PDQSORT: &str = "cpu_pdqsort";
/// Rayon parallel comparison sort.
pub const CPU_PARALLEL_PDQSORT: &str = "cpu_parallel_pdqsort";
/// The LSD radix sort engine.
pub const CPU_RADIX: &str = "cpu_radix";

/// Represents a single benchmark result for one algorithm at one array size
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    /// Name of the algorithm (e.g., "cpu_pdqsort", "cpu_radix")
    pub algorithm: String,
    /// Array size in elements
    pub array_size: usize,
    /// Execution time in milliseconds
    pub time_ms: f64,
    /// Whether the output matched the reference sort
    pub verified: bool,
    /// Bits per pass, for radix sort results
    pub radix_bits: Option<u32>,
}

/// Represents a complete benchmark report
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    /// Timestamp of when the benchmark was run (ISO 8601 format)
    pub timestamp: String,
    pub description: String,
    pub system_info: SystemInfo,
    pub results: Vec<BenchmarkResult>,
}

/// System information for the benchmark report
#[derive(Debug, Clone, PartialEq)]
pub struct SystemInfo {
    pub os: String,
    pub arch: String,
    /// Size of rayon's thread pool
    pub threads: usize,
}

impl Default for SystemInfo {
    fn default() -> Self {
        SystemInfo {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            threads: rayon::current_num_threads(),
        }
    }
}

impl BenchmarkReport {
    /// Create a new empty benchmark report
    pub fn new(description: &str) -> Self {
        BenchmarkReport {
            timestamp: utc_timestamp(),
            description: description.to_string(),
            system_info: SystemInfo::default(),
            results: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: BenchmarkResult) {
        self.results.push(result);
    }

    pub fn extend<I: IntoIterator<Item = BenchmarkResult>>(&mut self, results: I) {
        self.results.extend(results);
    }

    /// True when every recorded result matched the reference sort.
    pub fn all_verified(&self) -> bool {
        self.results.iter().all(|r| r.verified)
    }

    fn sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = self.results.iter().map(|r| r.array_size).collect();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }

    fn find(&self, size: usize, algorithm: &str) -> Option<&BenchmarkResult> {
        self.results
            .iter()
            .find(|r| r.array_size == size && r.algorithm == algorithm)
    }

    /// Generate the report in Links Notation format
    pub fn to_lino(&self) -> String {
        let mut output = String::new();

        writeln!(output, "benchmark_report:").unwrap();
        writeln!(output, "  timestamp '{}'", self.timestamp).unwrap();
        writeln!(output, "  description '{}'", escape_lino_string(&self.description)).unwrap();

        writeln!(output).unwrap();
        writeln!(output, "system_info:").unwrap();
        writeln!(output, "  os '{}'", escape_lino_string(&self.system_info.os)).unwrap();
        writeln!(output, "  arch '{}'", escape_lino_string(&self.system_info.arch)).unwrap();
        writeln!(output, "  threads {}", self.system_info.threads).unwrap();

        let sizes = self.sizes();

        writeln!(output).unwrap();
        writeln!(output, "results:").unwrap();
        for size in &sizes {
            writeln!(output, "  size_{}:", size).unwrap();
            for result in self.results.iter().filter(|r| r.array_size == *size) {
                writeln!(output, "    {}:", result.algorithm).unwrap();
                writeln!(output, "      time_ms {:.3}", result.time_ms).unwrap();
                writeln!(output, "      verified {}", result.verified).unwrap();
                if let Some(bits) = result.radix_bits {
                    writeln!(output, "      radix_bits {}", bits).unwrap();
                }
            }
        }

        writeln!(output).unwrap();
        writeln!(output, "comparisons:").unwrap();
        for size in &sizes {
            let Some(radix) = self.find(*size, CPU_RADIX) else {
                continue;
            };
            let baselines: Vec<(&str, &BenchmarkResult)> = [CPU_PDQSORT, CPU_PARALLEL_PDQSORT]
                .into_iter()
                .filter_map(|name| self.find(*size, name).map(|b| (name, b)))
                .collect();
            if baselines.is_empty() {
                continue;
            }

            writeln!(output, "  size_{}:", size).unwrap();
            for (name, baseline) in baselines {
                let speedup = baseline.time_ms / radix.time_ms;
                writeln!(output, "    {}_vs_{}:", CPU_RADIX, name).unwrap();
                writeln!(output, "      speedup {:.2}", speedup).unwrap();
                writeln!(
                    output,
                    "      faster {}",
                    if speedup > 1.0 { CPU_RADIX } else { name }
                )
                .unwrap();
            }
        }

        output
    }

    /// Save the report to a file in Links Notation format
    pub fn save_lino(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_lino())
    }

    /// Generate a markdown table from the report
    pub fn to_markdown_table(&self) -> String {
        let mut output = String::new();

        writeln!(output, "# Radix Sort Benchmark Report").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "**Timestamp:** {}", self.timestamp).unwrap();
        writeln!(output, "**Description:** {}", self.description).unwrap();
        writeln!(output).unwrap();

        writeln!(output, "## System Information").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "| Property | Value |").unwrap();
        writeln!(output, "|----------|-------|").unwrap();
        writeln!(output, "| OS | {} |", self.system_info.os).unwrap();
        writeln!(output, "| Arch | {} |", self.system_info.arch).unwrap();
        writeln!(output, "| Threads | {} |", self.system_info.threads).unwrap();
        writeln!(output).unwrap();

        writeln!(output, "## Benchmark Results").unwrap();
        writeln!(output).unwrap();
        writeln!(
            output,
            "| Size | CPU pdqsort (ms) | CPU parallel pdqsort (ms) | CPU Radix (ms) | Radix vs pdqsort | Verified |"
        )
        .unwrap();
        writeln!(
            output,
            "|------|------------------|---------------------------|----------------|------------------|----------|"
        )
        .unwrap();

        let time_of = |size: usize, algorithm: &str| {
            self.find(size, algorithm)
                .map(|r| format!("{:.3}", r.time_ms))
                .unwrap_or_else(|| "N/A".to_string())
        };

        for size in self.sizes() {
            let speedup = match (self.find(size, CPU_PDQSORT), self.find(size, CPU_RADIX)) {
                (Some(cmp), Some(radix)) => {
                    let s = cmp.time_ms / radix.time_ms;
                    if s > 1.0 {
                        format!("Radix {:.2}x faster", s)
                    } else {
                        format!("pdqsort {:.2}x faster", 1.0 / s)
                    }
                }
                _ => "N/A".to_string(),
            };
            let verified = self
                .results
                .iter()
                .filter(|r| r.array_size == size)
                .all(|r| r.verified);

            writeln!(
                output,
                "| {} | {} | {} | {} | {} | {} |",
                format_size(size),
                time_of(size, CPU_PDQSORT),
                time_of(size, CPU_PARALLEL_PDQSORT),
                time_of(size, CPU_RADIX),
                speedup,
                if verified { "yes" } else { "**NO**" }
            )
            .unwrap();
        }

        writeln!(output).unwrap();
        writeln!(output, "---").unwrap();
        writeln!(output, "*Report generated by radix-sorting benchmark tool*").unwrap();

        output
    }

    /// Save the report as a markdown file
    pub fn save_markdown(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_markdown_table())
    }
}

/// Escape a string for use in Links Notation (handle single quotes)
fn escape_lino_string(s: &str) -> String {
    s.replace('\'', "\\'")
}

/// Format a size as a human-readable string (e.g., "1K", "1M")
fn format_size(size: usize) -> String {
    if size >= 1_000_000_000 {
        format!("{}G", size / 1_000_000_000)
    } else if size >= 1_000_000 {
        format!("{}M", size / 1_000_000)
    } else if size >= 1_000 {
        format!("{}K", size / 1_000)
    } else {
        size.to_string()
    }
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SSZ`.
fn utc_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format_unix_timestamp(secs)
}

fn format_unix_timestamp(secs: u64) -> String {
    let days = (secs / 86_400) as i64;
    let time_of_day = secs % 86_400;
    let (year, month, day) = civil_from_days(days);

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        year,
        month,
        day,
        time_of_day / 3600,
        (time_of_day % 3600) / 60,
        time_of_day % 60
    )
}

/// Days since 1970-01-01 to a proleptic Gregorian (year, month, day).
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}

/// Parse a Links Notation report produced by [`BenchmarkReport::to_lino`].
///
/// Returns `None` when the content holds no results.
pub fn parse_lino_report(content: &str) -> Option<BenchmarkReport> {
    let mut report = BenchmarkReport::new("Parsed report");
    let mut current_size: Option<usize> = None;
    let mut current_result: Option<BenchmarkResult> = None;
    let mut section = "";

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if !line.starts_with(' ') && trimmed.ends_with(':') {
            if let Some(result) = current_result.take() {
                report.results.push(result);
            }
            section = trimmed.trim_end_matches(':');
            current_size = None;
            continue;
        }

        match section {
            "benchmark_report" => {
                if let Some(ts) = extract_quoted_value(trimmed, "timestamp") {
                    report.timestamp = ts;
                } else if let Some(desc) = extract_quoted_value(trimmed, "description") {
                    report.description = desc;
                }
            }
            "system_info" => {
                if let Some(os) = extract_quoted_value(trimmed, "os") {
                    report.system_info.os = os;
                } else if let Some(arch) = extract_quoted_value(trimmed, "arch") {
                    report.system_info.arch = arch;
                } else if let Some(threads) = trimmed.strip_prefix("threads ") {
                    if let Ok(threads) = threads.parse() {
                        report.system_info.threads = threads;
                    }
                }
            }
            "results" => {
                if let Some(size) = trimmed
                    .strip_prefix("size_")
                    .and_then(|s| s.strip_suffix(':'))
                {
                    if let Some(result) = current_result.take() {
                        report.results.push(result);
                    }
                    current_size = size.parse().ok();
                    continue;
                }

                if let Some(size) = current_size {
                    if trimmed.ends_with(':') && !trimmed.contains(' ') {
                        if let Some(result) = current_result.take() {
                            report.results.push(result);
                        }
                        current_result = Some(BenchmarkResult {
                            algorithm: trimmed.trim_end_matches(':').to_string(),
                            array_size: size,
                            time_ms: 0.0,
                            verified: false,
                            radix_bits: None,
                        });
                        continue;
                    }
                }

                if let Some(ref mut result) = current_result {
                    if let Some(time) = trimmed.strip_prefix("time_ms ") {
                        if let Ok(time) = time.parse() {
                            result.time_ms = time;
                        }
                    } else if let Some(verified) = trimmed.strip_prefix("verified ") {
                        result.verified = verified == "true";
                    } else if let Some(bits) = trimmed.strip_prefix("radix_bits ") {
                        result.radix_bits = bits.parse().ok();
                    }
                }
            }
            _ => {}
        }
    }

    if let Some(result) = current_result {
        report.results.push(result);
    }

    if report.results.is_empty() {
        None
    } else {
        Some(report)
    }
}

fn extract_quoted_value(line: &str, key: &str) -> Option<String> {
    let value = line.strip_prefix(key)?.strip_prefix(' ')?.trim();
    if value.len() >= 2 && value.starts_with('\'') && value.ends_with('\'') {
        Some(value[1..value.len() - 1].replace("\\'", "'"))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(algorithm: &str, size: usize, time_ms: f64) -> BenchmarkResult {
        BenchmarkResult {
            algorithm: algorithm.to_string(),
            array_size: size,
            time_ms,
            verified: true,
            radix_bits: if algorithm == CPU_RADIX { Some(4) } else { None },
        }
    }

    #[test]
    fn test_report_to_lino() {
        let mut report = BenchmarkReport::new("Test benchmark");
        report.add_result(result(CPU_RADIX, 1024, 1.5));

        let lino = report.to_lino();
        assert!(lino.contains("benchmark_report:"));
        assert!(lino.contains("cpu_radix:"));
        assert!(lino.contains("time_ms 1.500"));
        assert!(lino.contains("radix_bits 4"));
    }

    #[test]
    fn test_lino_comparisons() {
        let mut report = BenchmarkReport::new("cmp");
        report.add_result(result(CPU_PDQSORT, 4096, 2.0));
        report.add_result(result(CPU_RADIX, 4096, 1.0));

        let lino = report.to_lino();
        assert!(lino.contains("cpu_radix_vs_cpu_pdqsort:"));
        assert!(lino.contains("speedup 2.00"));
        assert!(lino.contains("faster cpu_radix"));
        assert!(!lino.contains("cpu_radix_vs_cpu_parallel_pdqsort"));
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(500), "500");
        assert_eq!(format_size(1000), "1K");
        assert_eq!(format_size(1024), "1K");
        assert_eq!(format_size(1_000_000), "1M");
        assert_eq!(format_size(1_048_576), "1M");
    }

    #[test]
    fn test_escape_lino_string() {
        assert_eq!(escape_lino_string("hello"), "hello");
        assert_eq!(escape_lino_string("it's"), "it\\'s");
    }

    #[test]
    fn test_format_unix_timestamp() {
        assert_eq!(format_unix_timestamp(0), "1970-01-01T00:00:00Z");
        assert_eq!(format_unix_timestamp(951_782_400), "2000-02-29T00:00:00Z");
        assert_eq!(format_unix_timestamp(1_700_000_000), "2023-11-14T22:13:20Z");
    }

    #[test]
    fn test_parse_lino_report() {
        let mut report = BenchmarkReport::new("it's a test run");
        report.add_result(result(CPU_PDQSORT, 1024, 1.5));
        report.add_result(result(CPU_RADIX, 1024, 0.8));
        let mut failed = result(CPU_RADIX, 2048, 1.7);
        failed.verified = false;
        report.add_result(failed);

        let parsed = parse_lino_report(&report.to_lino()).unwrap();

        assert_eq!(parsed.description, "it's a test run");
        assert_eq!(parsed.timestamp, report.timestamp);
        assert_eq!(parsed.system_info, report.system_info);
        assert_eq!(parsed.results, report.results);
        assert!(!parsed.all_verified());
    }

    #[test]
    fn test_parse_empty_report() {
        let report = BenchmarkReport::new("nothing ran");
        assert!(parse_lino_report(&report.to_lino()).is_none());
        assert!(parse_lino_report("").is_none());
    }

    #[test]
    fn test_markdown_table() {
        let mut report = BenchmarkReport::new("md");
        report.add_result(result(CPU_PDQSORT, 1_000_000, 60.0));
        report.add_result(result(CPU_RADIX, 1_000_000, 20.0));

        let md = report.to_markdown_table();
        assert!(md.contains("# Radix Sort Benchmark Report"));
        assert!(md.contains("| 1M | 60.000 | N/A | 20.000 | Radix 3.00x faster | yes |"));
    }
}
