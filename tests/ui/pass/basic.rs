use apicalypse::prelude::*;

#[derive(Apicalypse)]
struct Image {
    #[apicalypse(name = "image_id")]
    image_id: String,
}

#[derive(Apicalypse)]
#[apicalypse(name = "Game")]
struct ApiGame {
    #[apicalypse]
    id: u64,
    #[apicalypse(name = "cover", nested)]
    cover: Option<Box<Image>>,
    #[apicalypse(name = "genres")]
    genre_ids: Vec<u64>,
    cached_at: u64,
}

fn main() {
    assert_eq!(<ApiGame as Shape>::NAME, "Game");
    assert_eq!(
        apicalypse::core::serialize::<ApiGame>().unwrap(),
        "id, cover.image_id, genres"
    );
}
