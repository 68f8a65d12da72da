use apicalypse::Apicalypse;

#[derive(Apicalypse)]
enum Rating {
    Good,
}

fn main() {}
