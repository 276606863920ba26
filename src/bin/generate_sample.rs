use std::fs::File;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

const CSV_PATH: &str = "spacex_launch_dash.csv";
const PARQUET_PATH: &str = "spacex_launch_dash.parquet";

const HEADERS: [&str; 8] = [
    "",
    "Flight Number",
    "Launch Site",
    "Mission Outcome",
    "class",
    "Payload Mass (kg)",
    "Booster Version",
    "Booster Version Category",
];

/// (site, relative weight)
const SITES: [(&str, u64); 4] = [
    ("CCAFS LC-40", 26),
    ("CCAFS SLC-40", 7),
    ("KSC LC-39A", 13),
    ("VAFB SLC-4E", 10),
];

/// (category, typical payload kg, success probability)
const BOOSTERS: [(&str, f64, f64); 5] = [
    ("v1.0", 400.0, 0.2),
    ("v1.1", 2500.0, 0.35),
    ("FT", 4500.0, 0.75),
    ("B4", 5000.0, 0.7),
    ("B5", 7000.0, 0.95),
];

struct Launch {
    flight: i64,
    site: &'static str,
    class: i64,
    payload: f64,
    version: String,
    category: &'static str,
}

/// Minimal deterministic PRNG (splitmix64).
struct SplitMix(u64);

impl SplitMix {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn pick_site(rng: &mut SplitMix) -> &'static str {
    let total: u64 = SITES.iter().map(|(_, w)| w).sum();
    let mut roll = rng.next_u64() % total;
    for (site, weight) in SITES {
        if roll < weight {
            return site;
        }
        roll -= weight;
    }
    SITES[0].0
}

fn generate(n: usize, rng: &mut SplitMix) -> Vec<Launch> {
    (0..n)
        .map(|i| {
            // Booster generations follow flight order.
            let generation = (i * BOOSTERS.len() / n).min(BOOSTERS.len() - 1);
            let (category, typical, p_success) = BOOSTERS[generation];
            let payload = (typical * (0.3 + 1.2 * rng.next_f64())).round().min(9600.0);
            let class = i64::from(rng.next_f64() < p_success);
            Launch {
                flight: i as i64 + 1,
                site: pick_site(rng),
                class,
                payload,
                version: format!("F9 {category}  B{:04}", 1000 + i),
                category,
            }
        })
        .collect()
}

fn write_csv(launches: &[Launch]) -> Result<()> {
    let mut writer = csv::Writer::from_path(CSV_PATH).context("creating CSV")?;
    writer.write_record(HEADERS)?;
    for (idx, l) in launches.iter().enumerate() {
        let outcome = if l.class == 1 { "Success" } else { "Failure (in flight)" };
        writer.write_record([
            idx.to_string(),
            l.flight.to_string(),
            l.site.to_string(),
            outcome.to_string(),
            l.class.to_string(),
            format!("{:.1}", l.payload),
            l.version.clone(),
            l.category.to_string(),
        ])?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn write_parquet(launches: &[Launch]) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("Flight Number", DataType::Int64, false),
        Field::new("Launch Site", DataType::Utf8, false),
        Field::new("class", DataType::Int64, false),
        Field::new("Payload Mass (kg)", DataType::Float64, false),
        Field::new("Booster Version", DataType::Utf8, false),
        Field::new("Booster Version Category", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from_iter_values(launches.iter().map(|l| l.flight))),
            Arc::new(StringArray::from_iter_values(launches.iter().map(|l| l.site))),
            Arc::new(Int64Array::from_iter_values(launches.iter().map(|l| l.class))),
            Arc::new(Float64Array::from_iter_values(launches.iter().map(|l| l.payload))),
            Arc::new(StringArray::from_iter_values(launches.iter().map(|l| l.version.as_str()))),
            Arc::new(StringArray::from_iter_values(launches.iter().map(|l| l.category))),
        ],
    )
    .context("building record batch")?;

    let file = File::create(PARQUET_PATH).context("creating Parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating Parquet writer")?;
    writer.write(&batch).context("writing batch")?;
    writer.close().context("closing Parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SplitMix(42);
    let launches = generate(56, &mut rng);

    write_csv(&launches)?;
    write_parquet(&launches)?;

    println!(
        "Wrote {} launches to {CSV_PATH} and {PARQUET_PATH}",
        launches.len()
    );
    Ok(())
}
