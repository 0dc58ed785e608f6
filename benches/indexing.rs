//! Indexing and lookup benchmarks over a generated tree.
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use lindex::index::{IndexStore, build_index};
use lindex::query::{extract_snippets, search};
use lindex::utils::tokenize;
use std::fs;
use tempfile::TempDir;

/// Write `files` Rust-like sources of a few dozen lines each
fn create_fixture_tree(files: usize) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    for i in 0..files {
        let content = format!(
            r#"// File {i}
fn function_{i}() {{
    println!("Hello from function {i}");
    let x = {i} * 2;
    let y = x + 1;
}}

struct Struct{i} {{
    field: i32,
    name: String,
}}

impl Struct{i} {{
    fn new() -> Self {{
        Self {{ field: {i}, name: "test".to_string() }}
    }}
}}
"#,
            i = i
        );
        let dir = temp_dir.path().join(format!("mod_{}", i % 10));
        fs::create_dir_all(&dir).expect("Failed to create dir");
        fs::write(dir.join(format!("file_{}.rs", i)), content).expect("Failed to write file");
    }

    temp_dir
}

fn bench_tokenize(c: &mut Criterion) {
    let line = r#"fn getUserById(userId: i32) -> Option<User> { some_function_call(arg1, arg2); }"#;
    let page = format!("{}\n", line).repeat(200);

    let mut group = c.benchmark_group("tokenize");
    group.bench_function("line", |b| b.iter(|| tokenize(black_box(line))));
    group.bench_function("page_200_lines", |b| b.iter(|| tokenize(black_box(&page))));
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    group.sample_size(20);

    for files in [50, 500] {
        let tree = create_fixture_tree(files);
        group.bench_with_input(BenchmarkId::from_parameter(files), tree.path(), |b, root| {
            b.iter(|| build_index(black_box(root)).expect("build failed"))
        });
    }
    group.finish();
}

fn bench_store_and_query(c: &mut Criterion) {
    let tree = create_fixture_tree(500);
    let index = build_index(tree.path()).expect("build failed").index;

    let store_dir = TempDir::new().expect("Failed to create temp dir");
    let store = IndexStore::new(store_dir.path().join("search_index.json"));
    store.save(&index).expect("save failed");

    c.bench_function("store_load", |b| b.iter(|| store.load().expect("load failed")));

    c.bench_function("search_common_word", |b| {
        b.iter(|| search(black_box(&index), black_box("function")))
    });

    let path = index.resolve("mod_0/file_0.rs");
    c.bench_function("snippets", |b| {
        b.iter(|| extract_snippets(black_box(path.as_path()), &[3, 4, 15], 2))
    });
}

criterion_group!(benches, bench_tokenize, bench_build, bench_store_and_query);
criterion_main!(benches);
