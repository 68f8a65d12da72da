use apicalypse::Apicalypse;

#[derive(Apicalypse)]
struct Cover {
    #[apicalypse(rename = "url")]
    url: String,
}

fn main() {}
