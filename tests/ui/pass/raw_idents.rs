use apicalypse::Apicalypse;

#[derive(Apicalypse)]
struct Website {
    #[apicalypse]
    r#type: u8,
    #[apicalypse]
    url: String,
}

fn main() {
    assert_eq!(apicalypse::core::serialize::<Website>().unwrap(), "type, url");
}
