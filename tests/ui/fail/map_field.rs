use std::collections::HashMap;

use apicalypse::Apicalypse;

#[derive(Apicalypse)]
struct Game {
    #[apicalypse]
    tags: HashMap<String, String>,
}

fn main() {}
