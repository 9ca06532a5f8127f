use anyhow::Result;
use tempfile::TempDir;
use zip_coverage::core::report::read_entries;
use zip_coverage::{
    format_phone, sanitize_zip_input, BatchReport, BuiltinSource, CoverageTier,
    ZipCoverageClassifier,
};

#[test]
fn test_csv_leads_file_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("leads.csv");
    std::fs::write(
        &input,
        "name,phone,postal_code\n\
         Ann,555-123-4567,60431\n\
         Bo,5559876543, 60008 \n\
         Cy,,99999\n\
         Di,5550000000,604\n",
    )?;

    let entries = read_entries(&input, "postal_code")?;
    let classifier = ZipCoverageClassifier::from_source(&BuiltinSource)?;
    let report = BatchReport::build(&classifier, entries);

    let tiers: Vec<CoverageTier> = report.results.iter().map(|r| r.result.tier).collect();
    assert_eq!(
        tiers,
        vec![
            CoverageTier::Serviced,
            CoverageTier::Extended,
            CoverageTier::Unserved,
            CoverageTier::Invalid
        ]
    );

    for tier in CoverageTier::ALL {
        assert_eq!(report.summary.count(tier), 1, "tier {}", tier);
    }

    let json: serde_json::Value = serde_json::from_str(&report.render("json")?)?;
    assert_eq!(json["deployment"], "joliet-metro");
    assert_eq!(json["results"][1]["input"], " 60008 ");
    assert_eq!(json["results"][1]["zip"], "60008");
    Ok(())
}

#[test]
fn test_plain_text_input_is_one_zip_per_line() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("zips.txt");
    std::fs::write(&input, "60431\n60435\n\n99999\n")?;

    // column name is ignored for non-CSV input
    let entries = read_entries(&input, "zip")?;
    assert_eq!(entries, vec!["60431", "60435", "99999"]);
    Ok(())
}

#[test]
fn test_missing_input_file() {
    let result = read_entries(std::path::Path::new("/no/such/leads.csv"), "zip");
    assert!(result.is_err());
}

#[test]
fn test_form_input_shaping_feeds_classifier() -> Result<()> {
    let classifier = ZipCoverageClassifier::from_source(&BuiltinSource)?;

    // keystrokes typed into the zip field
    let typed = "604-31 ext";
    let zip = sanitize_zip_input(typed);
    assert_eq!(zip, "60431");
    assert_eq!(classifier.classify(&zip).tier, CoverageTier::Serviced);

    // partial entry is still shaped, and still rejected by the classifier
    let partial = sanitize_zip_input("60a4");
    assert_eq!(partial, "604");
    assert_eq!(classifier.classify(&partial).tier, CoverageTier::Invalid);

    assert_eq!(format_phone("815 555 01234"), "(815) 555-0123");
    Ok(())
}
