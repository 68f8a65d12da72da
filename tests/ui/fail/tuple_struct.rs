use apicalypse::Apicalypse;

#[derive(Apicalypse)]
struct Rating(f64);

fn main() {}
