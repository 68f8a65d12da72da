use apicalypse::Apicalypse;

#[derive(Apicalypse)]
#[apicalypse(nested)]
struct Cover {
    #[apicalypse]
    url: String,
}

fn main() {}
