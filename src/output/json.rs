// Tue Jan 13 2026 - Alex

use crate::output::{FeatureProvenance, ScanReport, ScanStatistics};
use crate::pattern::error::FeatureResult;
use crate::pattern::{Feature, FeatureSnapshot};
use serde_json::{json, to_string, to_string_pretty, Value};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct JsonSerializer {
    pretty_print: bool,
    include_positions: bool,
    include_provenance: bool,
    include_statistics: bool,
}

impl JsonSerializer {
    pub fn new() -> Self {
        Self {
            pretty_print: true,
            include_positions: true,
            include_provenance: true,
            include_statistics: true,
        }
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn with_positions(mut self, include: bool) -> Self {
        self.include_positions = include;
        self
    }

    pub fn with_provenance(mut self, include: bool) -> Self {
        self.include_provenance = include;
        self
    }

    pub fn with_statistics(mut self, include: bool) -> Self {
        self.include_statistics = include;
        self
    }

    pub fn serialize_features(&self, features: &[Feature]) -> FeatureResult<String> {
        let value = self.serialize_feature_list(features);
        self.render(&value)
    }

    pub fn serialize_report(&self, report: &ScanReport) -> FeatureResult<String> {
        let value = self.build_report_value(report);
        self.render(&value)
    }

    pub fn serialize_report_to_file<P: AsRef<Path>>(&self, report: &ScanReport, path: P) -> FeatureResult<()> {
        let json_str = self.serialize_report(report)?;

        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        writer.write_all(json_str.as_bytes())?;
        writer.flush()?;

        log::info!("Wrote {} features to {}", report.features.len(), path.as_ref().display());
        Ok(())
    }

    pub fn parse_features(&self, input: &str) -> FeatureResult<Vec<Feature>> {
        let snapshots: Vec<FeatureSnapshot> = serde_json::from_str(input)?;
        snapshots.into_iter()
            .map(Feature::try_from)
            .collect()
    }

    fn render(&self, value: &Value) -> FeatureResult<String> {
        let rendered = if self.pretty_print {
            to_string_pretty(value)?
        } else {
            to_string(value)?
        };
        Ok(rendered)
    }

    fn build_report_value(&self, report: &ScanReport) -> Value {
        let mut root = serde_json::Map::new();

        root.insert("features".to_string(), self.serialize_feature_list(&report.features));

        if self.include_provenance {
            root.insert("provenance".to_string(), self.serialize_provenance(&report.provenance));
        }

        if self.include_statistics {
            root.insert("statistics".to_string(), self.serialize_statistics(&report.statistics));
        }

        Value::Object(root)
    }

    fn serialize_feature_list(&self, features: &[Feature]) -> Value {
        let arr = features.iter()
            .map(|feature| {
                let snapshot = feature.snapshot();
                if self.include_positions {
                    json!({
                        "sequence": snapshot.sequence,
                        "count": snapshot.count,
                        "positions": snapshot.positions
                    })
                } else {
                    json!({
                        "sequence": snapshot.sequence,
                        "count": snapshot.count
                    })
                }
            })
            .collect();

        Value::Array(arr)
    }

    fn serialize_provenance(&self, provenance: &[FeatureProvenance]) -> Value {
        let mut map = serde_json::Map::new();

        for entry in provenance {
            let occurrences: Vec<Value> = entry.occurrences.iter()
                .map(|o| json!({ "index": o.index, "count": o.count }))
                .collect();
            map.insert(entry.sequence.clone(), Value::Array(occurrences));
        }

        Value::Object(map)
    }

    fn serialize_statistics(&self, stats: &ScanStatistics) -> Value {
        json!({
            "sequences": stats.sequences,
            "candidates": stats.candidates,
            "matched_candidates": stats.matched_candidates,
            "features": stats.features,
            "total_positions": stats.total_positions,
            "elapsed_ms": stats.elapsed_ms
        })
    }
}

impl Default for JsonSerializer {
    fn default() -> Self {
        Self::new()
    }
}
