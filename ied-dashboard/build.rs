use ied_core::enrollment::{locate_dataset, read_enrollment_csv, DatasetSource};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("iranian_students.csv");

    let explicit = env::var_os("IED_DATASET").map(PathBuf::from);
    let default = Path::new("../fixtures/iranian_students.csv");
    let sample = Path::new("../fixtures/sample_students.csv");
    let allow_sample = env::var_os("CARGO_FEATURE_SAMPLE_DATA").is_some();

    let source = locate_dataset(
        explicit.as_deref(),
        default,
        allow_sample.then_some(sample),
    )
    .unwrap_or_else(|e| {
        panic!(
            "{:#}; set IED_DATASET or enable the sample-data feature for synthetic rows",
            e
        )
    });
    if let DatasetSource::Sample(path) = &source {
        println!("cargo:warning=embedding synthetic sample {}", path.display());
    }

    // A malformed dataset fails the build rather than the page load.
    let records = read_enrollment_csv(source.path())
        .unwrap_or_else(|e| panic!("invalid enrollment dataset: {:#}", e));
    if records.is_empty() {
        panic!("{} has no rows", source.path().display());
    }

    fs::copy(source.path(), &dest).unwrap();

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=IED_DATASET");
    println!("cargo:rerun-if-changed={}", default.display());
    println!("cargo:rerun-if-changed={}", sample.display());
    if let Some(path) = &explicit {
        println!("cargo:rerun-if-changed={}", path.display());
    }
}
