use criterion::{Criterion, black_box, criterion_group, criterion_main};
use readme_locate::{MemoryTree, ReadmeResolver, localized_extensions};

fn wide_tree(files: usize) -> MemoryTree {
    let tree = (0..files).fold(MemoryTree::new(), |t, i| t.file(&format!("src_{i}.rs")));
    tree.file("README.txt")
        .file("readme.md")
        .file("README.md")
        .symlink("README.zh-cn.md", "missing.md")
}

fn resolve_benchmark(c: &mut Criterion) {
    c.bench_function("ReadmeResolver::resolve (direct match)", |b| {
        let tree = wide_tree(1_000);
        let resolver = ReadmeResolver::new(&tree);

        b.iter(|| {
            resolver
                .resolve("", black_box(tree.entries()), black_box("zh-CN"), true)
                .unwrap()
        })
    });

    c.bench_function("ReadmeResolver::resolve (well-known fallback)", |b| {
        let tree = (0..1_000)
            .fold(MemoryTree::new(), |t, i| t.file(&format!("src_{i}.rs")))
            .dir("docs", MemoryTree::new())
            .dir(".gitea", MemoryTree::new().file("notes.md"))
            .dir(".github", MemoryTree::new().file("README.md"));
        let resolver = ReadmeResolver::new(&tree);

        b.iter(|| {
            resolver
                .resolve("", black_box(tree.entries()), black_box("en"), true)
                .unwrap()
        })
    });
}

fn localized_extensions_benchmark(c: &mut Criterion) {
    c.bench_function("localized_extensions", |b| {
        b.iter(|| localized_extensions(black_box(".md"), black_box("zh-CN")))
    });
}

criterion_group!(benches, resolve_benchmark, localized_extensions_benchmark);
criterion_main!(benches);
