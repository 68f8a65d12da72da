#![allow(dead_code)]

use apicalypse::prelude::*;

#[derive(Apicalypse)]
pub struct Flat {
    #[apicalypse(name = "field1")]
    pub field1: i32,
    #[apicalypse(name = "field2")]
    pub field2: String,
    #[apicalypse(name = "field3")]
    pub field3: f64,
    #[apicalypse(name = "field4")]
    pub field4: f32,
    #[apicalypse(name = "field5")]
    pub field5: String,
    #[apicalypse(name = "field6")]
    pub field6: f32,
}

#[derive(Apicalypse)]
pub struct Grandchild1 {
    #[apicalypse(name = "field1")]
    pub field1: i32,
}

#[derive(Apicalypse)]
pub struct Grandchild2 {
    #[apicalypse(name = "field1")]
    pub field1: String,
    #[apicalypse(name = "field2")]
    pub field2: String,
}

#[derive(Apicalypse)]
pub struct Grandchild3 {
    #[apicalypse(name = "field1")]
    pub field1: String,
    #[apicalypse(name = "field2")]
    pub field2: String,
    #[apicalypse(name = "field3")]
    pub field3: String,
}

#[derive(Apicalypse)]
pub struct Child1 {
    #[apicalypse(name = "kid1", nested)]
    pub child1: Grandchild1,
}

#[derive(Apicalypse)]
pub struct Child2 {
    #[apicalypse(name = "kid1", nested)]
    pub child1: Grandchild1,
    #[apicalypse(name = "kid2", nested)]
    pub child2: Grandchild2,
}

#[derive(Apicalypse)]
pub struct Child3 {
    #[apicalypse(name = "kid1", nested)]
    pub child1: Grandchild1,
    #[apicalypse(name = "kid2", nested)]
    pub child2: Grandchild2,
    #[apicalypse(name = "kid3", nested)]
    pub child3: Grandchild3,
}

/// Three levels deep, sharing `Grandchild1` across parents
#[derive(Apicalypse)]
pub struct Family {
    #[apicalypse(name = "parent")]
    pub parent: i32,
    #[apicalypse(name = "child1", nested)]
    pub child1: Child1,
    #[apicalypse(name = "child2", nested)]
    pub child2: Child2,
    #[apicalypse(name = "child3", nested)]
    pub child3: Child3,
}

#[derive(Apicalypse)]
pub struct Cover {
    #[apicalypse(name = "url")]
    pub url: String,
}

/// A nested shape between two scalars
#[derive(Apicalypse)]
pub struct Game {
    #[apicalypse(name = "id")]
    pub id: u64,
    #[apicalypse(name = "cover", nested)]
    pub cover: Option<Box<Cover>>,
    #[apicalypse(name = "name")]
    pub name: String,
}

#[derive(Apicalypse)]
pub struct Unannotated {
    pub field1: i32,
    pub field2: f32,
}

#[derive(Apicalypse)]
pub struct EmptyName {
    #[apicalypse(name = "")]
    pub field1: i32,
}

#[derive(Apicalypse)]
pub struct BlankName {
    #[apicalypse(name = "id")]
    pub id: i32,
    #[apicalypse(name = "   ")]
    pub field1: i32,
}

#[derive(Apicalypse)]
pub struct Gallery {
    #[apicalypse(name = "id")]
    pub id: u64,
    #[apicalypse(name = "screenshots", nested)]
    pub screenshots: Vec<Cover>,
}

/// Broken only below the root
#[derive(Apicalypse)]
pub struct BrokenParent {
    #[apicalypse(name = "id")]
    pub id: u64,
    #[apicalypse(name = "child", nested)]
    pub child: EmptyName,
}
