#![allow(missing_docs)]

use wordsieve::{
    data::{DEFAULT_FIX_LENGTH, TextField},
    vocab::{TokenVocab, VocabBuilderOptions},
};

const CORPUS: &[&str] = &[
    "The movie was GREAT, truly great!",
    "Why would anyone watch this?",
    "I (really) liked the ending.",
];

fn vocab(field: &TextField) -> TokenVocab<u32> {
    let texts: Vec<String> = CORPUS.iter().map(|s| s.to_string()).collect();
    let samples = field.preprocess_batch(&texts).unwrap();
    field
        .build_vocab(samples.iter(), &VocabBuilderOptions::default())
        .unwrap()
}

#[test]
fn test_encode_decode_round_trip() {
    let field = TextField::default();
    let vocab = vocab(&field);

    for text in CORPUS {
        let tokens = field.preprocess(text).unwrap();
        let ids = field.process(&[tokens.clone()], &vocab).unwrap();
        assert_eq!(ids.rows[0].len(), DEFAULT_FIX_LENGTH);
        assert_eq!(vocab.decode(&ids.rows[0]).unwrap(), tokens.join(" "));
    }
}

#[test]
fn test_round_trip_truncates_and_maps_unknowns() {
    let field = TextField::default();
    let vocab = vocab(&field);

    let long = vec!["Great"; 60].join(" ");
    let tokens = field.preprocess(&long).unwrap();
    let ids = field.process(&[tokens], &vocab).unwrap();
    assert_eq!(vocab.decode(&ids.rows[0]).unwrap(), vec!["great"; 50].join(" "));

    let tokens = field.preprocess("Great zebras!").unwrap();
    let ids = field.process(&[tokens], &vocab).unwrap();
    assert_eq!(vocab.decode(&ids.rows[0]).unwrap(), "great <unk> !");
}
