use std::collections::{BTreeSet, VecDeque};

use apicalypse::Apicalypse;
use apicalypse::core::{FieldType, Shape};

#[derive(Apicalypse)]
struct Video {
    #[apicalypse]
    video_id: String,
}

#[derive(Apicalypse)]
struct Catalog {
    #[apicalypse]
    themes: BTreeSet<u32>,
    #[apicalypse]
    keywords: VecDeque<u32>,
    #[apicalypse]
    ratings: [u8; 3],
    #[apicalypse(nested)]
    videos: Vec<Video>,
}

fn main() {
    assert_eq!(Catalog::FIELDS[0].ty, FieldType::ScalarCollection);
    assert_eq!(Catalog::FIELDS[2].ty, FieldType::ScalarCollection);
    assert!(matches!(Catalog::FIELDS[3].ty, FieldType::NestedCollection(_)));
    assert!(apicalypse::core::serialize::<Catalog>().is_err());
}
