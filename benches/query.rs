use std::hint::black_box;

use apicalypse::core::{FieldSerializer, MetadataRegistry, serialize};
use apicalypse::prelude::*;
use apicalypse_igdb::{
    ApiGame, FixedClock, GamesQueryFactory, QueryWindows, SystemQueryTimestampProvider,
};
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    group.bench_function("game_cached", |b| {
        b.iter(|| serialize::<ApiGame>().unwrap());
    });

    group.bench_function("game_cold", |b| {
        b.iter_batched(
            MetadataRegistry::new,
            |registry| {
                FieldSerializer::new(&registry)
                    .serialize::<ApiGame>()
                    .unwrap()
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    group.bench_function("where_chain", |b| {
        b.iter(|| {
            ApicalypseQueryBuilder::new()
                .select("id, title, genres, likes, rating, release_date")
                .r#where(|w| {
                    w.contains_any_of("id", black_box([1, 2, 3]))
                        .and("title".is_not_null())
                        .and("genres".contains_any_of([20, 30, 40]))
                        .and("likes".is_larger_than(20))
                        .or("rating".is_larger_than_or_equal_to(80))
                })
                .offset(100)
                .limit(500)
                .sort_asc("title")
                .build()
        });
    });

    let factory = GamesQueryFactory::new(SystemQueryTimestampProvider::with_clock(
        QueryWindows::default(),
        FixedClock(1_700_000_000),
    ));
    group.bench_function("popular_games", |b| {
        b.iter(|| factory.popular(black_box(0), black_box(20)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_serialize, bench_build);
criterion_main!(benches);
