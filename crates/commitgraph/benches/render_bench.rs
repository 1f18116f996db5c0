use chrono::{DateTime, Utc};
use commitgraph::render::{RenderOptions, render};
use commitgraph_git::{CommitRecord, Cutoff, RawCommit, number_commits};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

/// Build a history of `size` commits with a merge every tenth commit
fn synthetic_history(size: usize) -> Vec<RawCommit> {
    (0..size)
        .map(|i| {
            let mut parents = Vec::new();
            if i > 0 {
                parents.push(format!("{:040x}", i - 1));
            }
            if i >= 10 && i % 10 == 0 {
                parents.push(format!("{:040x}", i - 10));
            }
            let timestamp = DateTime::<Utc>::from_timestamp(1_600_000_000 + (i as i64) * 60, 0)
                .expect("valid timestamp");
            RawCommit::new(
                format!("{i:040x}"),
                parents,
                timestamp,
                Some(&format!("Commit {i} with a reasonably long \"subject\" line")),
            )
        })
        .rev()
        .collect()
}

fn numbered_history(size: usize) -> Vec<CommitRecord> {
    number_commits(synthetic_history(size), &Cutoff::at(DateTime::<Utc>::MAX_UTC))
}

fn render_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for size in [100usize, 1_000, 10_000].iter() {
        let commits = numbered_history(*size);
        group.bench_with_input(BenchmarkId::new("mermaid", size), &commits, |b, commits| {
            b.iter(|| render(commits, &RenderOptions::default()))
        });
    }

    group.finish();
}

fn numbering_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("numbering");

    for size in [100usize, 1_000, 10_000].iter() {
        let raw = synthetic_history(*size);
        let cutoff = Cutoff::at(DateTime::<Utc>::MAX_UTC);
        group.bench_with_input(BenchmarkId::new("sort_and_number", size), &raw, |b, raw| {
            b.iter(|| number_commits(raw.clone(), &cutoff))
        });
    }

    group.finish();
}

criterion_group!(benches, render_benchmarks, numbering_benchmarks);
criterion_main!(benches);
