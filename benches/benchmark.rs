//! # パフォーマンス計測
//!
//! ## 計測方法
//! 要素数nのリストに対して、以下を計測する。
//!
//! - append: 空のリストにn回appendする。末尾ポインタによりnに比例するはず
//! - get: 末尾の要素をgetする。先頭からたどるためnに比例
//! - insert: 中央にinsertし、同じ位置をremoveする
//!
//! `cargo bench`で実行する。insertとremoveは同じ位置に対して行うため、
//! 計測中もリストの長さは変わらない。
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linkedlist::List;
use std::time::Duration;

/// (計測のid、要素数)というタプル
const INPUTS: &[(&str, usize)] = &[
    ("n = 10", 10),
    ("n = 100", 100),
    ("n = 1000", 1000),
    ("n = 10000", 10000),
];

fn append(c: &mut Criterion) {
    let mut g = c.benchmark_group("Append");
    g.measurement_time(Duration::from_secs(5));

    for i in INPUTS {
        g.bench_with_input(i.0, &i.1, |b, n| {
            b.iter(|| {
                let mut list = List::new();
                for x in 0..*n {
                    list.append(x);
                }
                list
            })
        });
    }
}

fn get_last(c: &mut Criterion) {
    let mut g = c.benchmark_group("Get Last");
    g.measurement_time(Duration::from_secs(5));

    for i in INPUTS {
        let list: List<usize> = (0..i.1).collect();
        g.bench_with_input(i.0, &list, |b, list| {
            b.iter(|| list.get(black_box(list.size() - 1)).copied())
        });
    }
}

fn insert_remove_middle(c: &mut Criterion) {
    let mut g = c.benchmark_group("Insert Remove Middle");
    g.measurement_time(Duration::from_secs(5));

    for i in INPUTS {
        let mut list: List<usize> = (0..i.1).collect();
        let middle = i.1 / 2;
        g.bench_function(i.0, |b| {
            b.iter(|| {
                let inserted = list.insert(black_box(middle), 0);
                black_box((inserted, list.remove(black_box(middle))))
            })
        });
    }
}

criterion_group!(benches, append, get_last, insert_remove_middle);
criterion_main!(benches);
