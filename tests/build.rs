use std::fs::File;
use std::io::Write;
use std::path::Path;

use flate2::{write::GzEncoder, Compression};
use serde_json::json;
use tempfile::tempdir;
use tweetcorpus::{
    error::Error,
    io::reader::MalformedPolicy,
    lang::Lang,
    processing::{
        assemble::split_filename, package::checksum_filename, Budgets, CorpusBuilder,
        CorpusConfig, Split, Tier,
    },
};

/// Budgets where each generated tweet (11 words, 13 budget tokens) fills:
/// 3 tweets for train, 1 for valid and test, 2 more for large train.
const SMALL_BUDGETS: Budgets = Budgets {
    train: 30,
    valid: 10,
    test: 10,
    large_train: 20,
};

fn tweet_text(i: usize) -> String {
    format!("tweet number {} has quite a lot of words in it", i)
}

fn write_jsonl(path: &Path, lines: &[String]) {
    let mut f = File::create(path).unwrap();
    for line in lines {
        writeln!(f, "{}", line).unwrap();
    }
}

fn write_jsonl_gz(path: &Path, lines: &[String]) {
    let f = File::create(path).unwrap();
    let mut enc = GzEncoder::new(f, Compression::default());
    for line in lines {
        writeln!(enc, "{}", line).unwrap();
    }
    enc.finish().unwrap();
}

fn tweets(range: std::ops::Range<usize>) -> Vec<String> {
    range
        .map(|i| json!({ "id": i, "text": tweet_text(i) }).to_string())
        .collect()
}

fn config(src: &Path, dst: &Path) -> CorpusConfig {
    let mut config = CorpusConfig::new(
        src.to_path_buf(),
        dst.to_path_buf(),
        Lang::parse("en").unwrap(),
    );
    config.budgets = SMALL_BUDGETS;
    config
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test_log::test]
fn build_tiers() {
    let src = tempdir().unwrap();
    let dst = tempdir().unwrap();
    write_jsonl(&src.path().join("00.jsonl"), &tweets(0..5));
    write_jsonl_gz(&src.path().join("01.jsonl.gz"), &tweets(5..12));

    let builder = CorpusBuilder::new(config(src.path(), dst.path()));
    let report = builder.run().unwrap();

    let records: Vec<u64> = report.passes.iter().map(|p| p.nb_records).collect();
    assert_eq!(records, vec![3, 1, 1, 2, 5]);
    assert_eq!(report.skipped_records, 0);

    for tier in Tier::ALL.iter() {
        let dir = dst.path().join(tier.dir_name("en"));
        for split in Split::ALL.iter() {
            assert!(dir.join(split_filename("en", *split)).is_file());
        }
    }
    assert!(dst.path().join("en-2").is_dir());
    assert!(dst.path().join("en-100").is_dir());
    assert!(dst.path().join("en-all").is_dir());

    for split in [Split::Valid, Split::Test].iter() {
        let small = read(&builder.split_path(Tier::Small, *split));
        assert_eq!(small, read(&builder.split_path(Tier::Large, *split)));
        assert_eq!(small, read(&builder.split_path(Tier::All, *split)));
    }

    let small_train = read(&builder.split_path(Tier::Small, Split::Train));
    let all_train = read(&builder.split_path(Tier::All, Split::Train));
    assert_eq!(
        small_train.lines().collect::<Vec<_>>(),
        (0..3).map(tweet_text).collect::<Vec<_>>()
    );
    // files are read in name order, gz included
    assert_eq!(
        all_train.lines().collect::<Vec<_>>(),
        (0..3).chain(5..12).map(tweet_text).collect::<Vec<_>>()
    );

    let report_json: serde_json::Value =
        serde_json::from_str(&read(&builder.report_path())).unwrap();
    assert_eq!(report_json["lang"], "en");
    assert_eq!(report_json["passes"].as_array().unwrap().len(), 5);
}

#[test]
fn build_cleans_and_filters() {
    let src = tempdir().unwrap();
    let dst = tempdir().unwrap();
    let lines = vec![
        json!({ "text": "RT @jane: this one is long enough to be kept in the corpus https://t.co/AbC" })
            .to_string(),
        json!({ "text": "too short" }).to_string(),
        json!({
            "text": "truncated…",
            "extended_tweet": { "full_text": "the full text of this tweet is what ends up in the file" }
        })
        .to_string(),
    ];
    write_jsonl(&src.path().join("tweets.jsonl"), &lines);

    let mut config = config(src.path(), dst.path());
    config.budgets = Budgets::default();
    let builder = CorpusBuilder::new(config);
    builder.run().unwrap();

    let train = read(&builder.split_path(Tier::Small, Split::Train));
    assert_eq!(
        train.lines().collect::<Vec<_>>(),
        vec![
            "jane this one is long enough to be kept in the corpus",
            "the full text of this tweet is what ends up in the file",
        ]
    );
}

#[test]
fn missing_input() {
    let dst = tempdir().unwrap();
    let builder = CorpusBuilder::new(config(&dst.path().join("nope"), dst.path()));
    assert!(matches!(builder.run(), Err(Error::MissingInput(_))));
    // nothing is created
    assert!(!dst.path().join("en-2").exists());
}

#[test]
fn malformed_abort() {
    let src = tempdir().unwrap();
    let dst = tempdir().unwrap();
    let mut lines = tweets(0..2);
    lines.push("{ not json".to_string());
    lines.extend(tweets(2..4));
    write_jsonl(&src.path().join("tweets.jsonl"), &lines);

    let builder = CorpusBuilder::new(config(src.path(), dst.path()));
    match builder.run() {
        Err(Error::MalformedRecord { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected a malformed record error, got {:?}", other),
    }
}

#[test]
fn malformed_skip() {
    let src = tempdir().unwrap();
    let dst = tempdir().unwrap();
    let mut lines = tweets(0..2);
    lines.push("{ not json".to_string());
    lines.push(json!({ "id": 42 }).to_string());
    lines.extend(tweets(2..4));
    write_jsonl(&src.path().join("tweets.jsonl"), &lines);

    let mut config = config(src.path(), dst.path());
    config.policy = MalformedPolicy::Skip;
    let builder = CorpusBuilder::new(config);
    let report = builder.run().unwrap();

    assert_eq!(report.skipped_records, 2);
    let train = read(&builder.split_path(Tier::Small, Split::Train));
    assert_eq!(train.lines().count(), 3);
}

#[test]
fn checksums() {
    let src = tempdir().unwrap();
    let dst = tempdir().unwrap();
    write_jsonl(&src.path().join("tweets.jsonl"), &tweets(0..8));

    let mut config = config(src.path(), dst.path());
    config.checksum = true;
    let builder = CorpusBuilder::new(config);
    builder.run().unwrap();

    for tier in Tier::ALL.iter() {
        let name = tier.dir_name("en");
        let path = builder.tier_dir(*tier).join(checksum_filename(&name));
        let content = read(&path);
        let files: Vec<&str> = content
            .lines()
            .map(|l| l.split(' ').nth(1).unwrap())
            .collect();
        assert_eq!(
            files,
            vec![
                "en.tweets.test.tokens",
                "en.tweets.train.tokens",
                "en.tweets.valid.tokens"
            ]
        );
    }
}
