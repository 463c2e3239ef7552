// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! End-to-end tests over real git repositories
//!
//! Each test builds a scan tree of throwaway repositories, runs the pipeline
//! with the `git2` reader and a pinned clock, and checks the resulting feed.


use chrono::{DateTime, Duration, TimeZone, Utc};
use git_standup::config::Config;
use git_standup::exclude::ExclusionMode;
use git_standup::pipeline::{self, StandupReport};
use git_standup::recency::FixedClock;
use similar_asserts::assert_eq;
use standup_git::Git2Reader;
use test_utils::ScanTree;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
}

fn build(config: &Config) -> StandupReport {
    pipeline::build_feed(config, &Git2Reader, &FixedClock(now())).expect("Failed to build feed")
}

fn messages(report: &StandupReport) -> Vec<String> {
    report
        .feed
        .iter()
        .map(|e| format!("{}:{}", e.repo, e.commit.summary_line()))
        .collect()
}

#[test]
fn test_feed_interleaves_repositories_chronologically() {
    let tree = ScanTree::new();
    let a = tree.init_repo("alpha");
    let b = tree.init_repo("nested/dir/beta");

    a.commit_at(now() - Duration::hours(5), "a1");
    b.commit_at(now() - Duration::hours(4), "b1");
    a.commit_at(now() - Duration::hours(3), "a2");
    b.commit_at(now() - Duration::hours(2), "b2");

    let report = build(&Config::for_paths([tree.path()]));

    assert_eq!(
        messages(&report),
        vec!["alpha:a1", "beta:b1", "alpha:a2", "beta:b2"]
    );
    assert!(report.skipped.is_empty());
}

#[test]
fn test_only_recent_commits_are_reported() {
    let tree = ScanTree::new();
    let repo = tree.init_repo("project");
    repo.commit_at(now() - Duration::days(60), "ancient");
    repo.commit_at(now() - Duration::days(50), "exactly fifty days");
    repo.commit_at(now() - Duration::days(49), "recent");

    let report = build(&Config::for_paths([tree.path()]));
    assert_eq!(messages(&report), vec!["project:recent"]);

    let wider = Config {
        days: 61,
        ..Config::for_paths([tree.path()])
    };
    assert_eq!(build(&wider).feed.len(), 3);
}

#[test]
fn test_retrieval_cap_hides_fifty_first_commit() {
    let tree = ScanTree::new();
    let repo = tree.init_repo("busy");
    repo.commit_hourly(now(), 1, 51);

    let report = build(&Config::for_paths([tree.path()]));

    assert_eq!(report.feed.len(), 50);
    let all = messages(&report);
    assert!(!all.contains(&"busy:commit 0".to_string()));
    assert_eq!(all.first().map(String::as_str), Some("busy:commit 1"));
    assert_eq!(all.last().map(String::as_str), Some("busy:commit 50"));
}

#[test]
fn test_max_count_option_lowers_cap() {
    let tree = ScanTree::new();
    let repo = tree.init_repo("busy");
    repo.commit_hourly(now(), 1, 10);

    let config = Config {
        max_count: 3,
        ..Config::for_paths([tree.path()])
    };
    assert_eq!(
        messages(&build(&config)),
        vec!["busy:commit 7", "busy:commit 8", "busy:commit 9"]
    );
}

#[test]
fn test_exclude_removes_subdirectory_repository() {
    let tree = ScanTree::new();
    tree.init_repo("work/app")
        .commit_at(now() - Duration::hours(1), "app change");
    tree.init_repo("work/vendor/lib")
        .commit_at(now() - Duration::hours(2), "lib change");

    let config = Config {
        excludes: vec![tree.path().join("work/vendor")],
        ..Config::for_paths([tree.path().join("work")])
    };

    assert_eq!(messages(&build(&config)), vec!["app:app change"]);
}

#[test]
fn test_symmetric_exclusion_matches_legacy_operator() {
    let tree = ScanTree::new();
    tree.init_repo("scan/kept")
        .commit_at(now() - Duration::hours(3), "kept");
    tree.init_repo("scan/both")
        .commit_at(now() - Duration::hours(2), "both");
    tree.init_repo("elsewhere/extra")
        .commit_at(now() - Duration::hours(1), "extra");

    let config = Config {
        excludes: vec![tree.path().join("scan/both"), tree.path().join("elsewhere")],
        exclude_mode: ExclusionMode::Symmetric,
        ..Config::for_paths([tree.path().join("scan")])
    };

    assert_eq!(messages(&build(&config)), vec!["kept:kept", "extra:extra"]);
}

#[test]
fn test_overlapping_roots_count_once() {
    let tree = ScanTree::new();
    tree.init_repo("outer/inner/repo")
        .commit_at(now() - Duration::hours(1), "only once");

    let config = Config::for_paths([tree.path().to_path_buf(), tree.path().join("outer/inner")]);
    let report = build(&config);

    assert_eq!(report.repositories, 1);
    assert_eq!(messages(&report), vec!["repo:only once"]);
}

#[test]
fn test_empty_and_missing_roots() {
    let tree = ScanTree::new();
    tree.create_subdir("no/repos/here");

    let config = Config::for_paths([tree.path().to_path_buf(), tree.path().join("missing")]);
    let report = build(&config);

    assert!(report.feed.is_empty());
    assert_eq!(report.repositories, 0);
}

#[test]
fn test_corrupt_repository_is_skipped() {
    let tree = ScanTree::new();
    tree.init_repo("healthy")
        .commit_at(now() - Duration::hours(1), "healthy");
    let broken = tree.create_subdir("broken/.git");
    std::fs::write(broken.join("HEAD"), "not a ref").expect("Failed to write HEAD");

    let report = build(&Config::for_paths([tree.path()]));

    assert_eq!(messages(&report), vec!["healthy:healthy"]);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].location.name(), "broken");
}

#[test]
fn test_empty_repository_contributes_nothing() {
    let tree = ScanTree::new();
    tree.init_repo("fresh");
    tree.init_repo("used")
        .commit_at(now() - Duration::hours(1), "hello");

    let report = build(&Config::for_paths([tree.path()]));

    assert_eq!(messages(&report), vec!["used:hello"]);
    assert!(report.skipped.is_empty());
}

#[test]
fn test_report_lines_keep_committer_offset() {
    let tree = ScanTree::new();
    tree.init_repo("tz").commit_as(
        "Kim",
        Utc.with_ymd_and_hms(2026, 10, 14, 7, 30, 0).unwrap(),
        120,
        "\nadd timezone support\n\nwith body\n",
    );

    let mut out = Vec::new();
    pipeline::run(
        &Config::for_paths([tree.path()]),
        &Git2Reader,
        &FixedClock(now()),
        &mut out,
    )
    .expect("Failed to run pipeline");

    let text = String::from_utf8(out).expect("utf8 output");
    assert_eq!(
        text,
        format!(
            "2026-10-14 09:30:00+02:00 {:<20} {:<20} add timezone support\n\nwith body\n",
            "tz", "Kim"
        )
    );
}
