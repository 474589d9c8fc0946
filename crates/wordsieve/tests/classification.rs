#![allow(missing_docs)]

use std::{fs, path::Path};

use tempdir::TempDir;
use wordsieve::{
    batching::{BatchCollator, collate_epoch},
    data::{
        ClassificationOptions,
        ClassificationPipeline,
        LabeledExample,
        SplitSizes,
        TextField,
        read_labeled_csv_path,
    },
};

const TRAIN_ROWS: &[(&str, &str)] = &[
    ("A wonderful, moving film.", "pos"),
    ("Terrible acting; I walked out!", "neg"),
    ("Loved it (twice).", "pos"),
    ("Not worth the ticket?", "neg"),
    ("A \"classic\" for the ages.", "pos"),
];

fn write_csv(
    path: &Path,
    rows: &[(String, String)],
) {
    let mut writer = csv::Writer::from_path(path).unwrap();
    writer.write_record(["text", "label"]).unwrap();
    for (text, label) in rows {
        writer.write_record([text, label]).unwrap();
    }
    writer.flush().unwrap();
}

fn train_rows(copies: usize) -> Vec<(String, String)> {
    (0..copies)
        .flat_map(|i| {
            TRAIN_ROWS
                .iter()
                .map(move |(text, label)| (format!("{text} #{i}"), label.to_string()))
        })
        .collect()
}

#[test]
fn test_pipeline_from_csv() {
    let tmp = TempDir::new("wordsieve-classify").unwrap();
    let train_path = tmp.path().join("binary_train.csv");
    let test_path = tmp.path().join("binary_test.csv");
    write_csv(&train_path, &train_rows(20));
    write_csv(
        &test_path,
        &[
            ("Wonderful!".to_string(), "pos".to_string()),
            ("Terrible.".to_string(), "neg".to_string()),
        ],
    );

    let pipeline: ClassificationPipeline<u32> = ClassificationPipeline::from_csv_paths(
        &train_path,
        &test_path,
        TextField::default(),
        ClassificationOptions::default().with_seed(1234),
    )
    .unwrap();

    assert_eq!(
        pipeline.sizes(),
        SplitSizes {
            train: 80,
            valid: 20,
            test: 2,
        }
    );

    let vocab = pipeline.text_vocab();
    assert_eq!(vocab.special_id(wordsieve::vocab::SpecialRole::Unknown), Some(0));
    assert_eq!(vocab.special_id(wordsieve::vocab::SpecialRole::Padding), Some(1));
    for token in ["wonderful", ",", "(", "!", "?"] {
        assert!(vocab.contains(token), "missing {token:?}");
    }
    // Dropped by normalization.
    assert!(!vocab.contains(";"));
    assert!(!vocab.contains("\""));
    assert_eq!(pipeline.label_vocab().len(), 2);

    let collator = pipeline.collator();
    let mut train_iter = pipeline.train_iter().unwrap();
    let batches = collate_epoch(&mut train_iter, pipeline.train(), &collator).unwrap();
    assert_eq!(batches.len(), 2);
    assert_eq!(batches.iter().map(|b| b.len()).sum::<usize>(), 80);
    for batch in &batches {
        assert_eq!(batch.text.len(), batch.labels.len());
        assert!(batch.text.iter().all(|row| row.len() == 50));
        assert!(batch.lengths.is_none());
    }

    let mut valid_iter = pipeline.valid_iter().unwrap();
    let valid = collate_epoch(&mut valid_iter, pipeline.valid(), &collator).unwrap();
    assert_eq!(valid.len(), 1);
    assert_eq!(valid[0].len(), 20);

    let test_iter = pipeline.test_iter().unwrap();
    let test_batch = collator
        .collate_indices(pipeline.test(), &test_iter.plan(0)[0])
        .unwrap();
    let pos = pipeline.label_vocab().encode("pos").unwrap();
    let neg = pipeline.label_vocab().encode("neg").unwrap();
    assert_eq!(test_batch.labels, vec![pos, neg]);
    // "wonderful !" then padding.
    assert_eq!(test_batch.text[0][2..], [1; 48]);
}

#[test]
fn test_labeled_csv_serde_rows() {
    let tmp = TempDir::new("wordsieve-classify").unwrap();
    let path = tmp.path().join("rows.csv");
    fs::write(&path, "text,label,extra\n\"Hi, there\",pos,x\nBye,neg,y\n").unwrap();

    let rows = read_labeled_csv_path(&path).unwrap();
    assert_eq!(
        rows,
        vec![
            LabeledExample::new("Hi, there", "pos"),
            LabeledExample::new("Bye", "neg"),
        ]
    );

    let json: Vec<String> = rows
        .iter()
        .map(|row| serde_json::to_string(row).unwrap())
        .collect();
    assert_eq!(json[0], r#"{"text":"Hi, there","label":"pos"}"#);
    let back: LabeledExample = serde_json::from_str(&json[1]).unwrap();
    assert_eq!(back, rows[1]);
}

#[test]
fn test_missing_file() {
    let tmp = TempDir::new("wordsieve-classify").unwrap();
    let missing = tmp.path().join("nope.csv");
    let result = ClassificationPipeline::<u32>::from_csv_paths(
        &missing,
        &missing,
        TextField::default(),
        ClassificationOptions::default(),
    );
    assert!(matches!(result, Err(wordsieve::WordsieveError::Io(_))));
}
