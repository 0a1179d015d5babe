//! Bootstrap fixtures used when no snapshot has been persisted yet.
//!
//! Seeding is a one-time bootstrap: the provider runs once, its output is
//! persisted immediately, and it is never consulted again. Fixture
//! timestamps are expressed relative to the bootstrap instant.

use chrono::{DateTime, Duration, Utc};

use crate::{
    domain::{
        message::{MediaKind, Message},
        sentiment::Sentiment,
        thread::Thread,
        user::User,
    },
    infra::contracts::SeedProvider,
};

/// Seeds the two example conversations shipped with a fresh install.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSeed;

impl SeedProvider for DefaultSeed {
    fn initial_threads(&self, now: DateTime<Utc>) -> Vec<Thread> {
        vec![explorers_thread(now), workshop_thread(now)]
    }
}

/// Seeds nothing; used for clean starts in tests.
#[cfg_attr(not(test), allow(dead_code))]
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptySeed;

impl SeedProvider for EmptySeed {
    fn initial_threads(&self, _now: DateTime<Utc>) -> Vec<Thread> {
        Vec::new()
    }
}

fn explorers_thread(now: DateTime<Utc>) -> Thread {
    let mut thread = Thread::group(
        "thread-1",
        "Cosmic Explorers",
        vec![
            "1".to_owned(),
            "2".to_owned(),
            "3".to_owned(),
            "4".to_owned(),
        ],
        now - Duration::hours(2),
    );

    thread.append_message(Message {
        id: "msg-1".to_owned(),
        thread_id: "thread-1".to_owned(),
        sender_id: "1".to_owned(),
        content: "The nebula expedition was incredible! The cosmic dust patterns were unlike anything we've seen before.".to_owned(),
        timestamp: now - Duration::hours(2),
        sentiment: Sentiment::Positive,
        media_url: MediaKind::Image.media_url().map(str::to_owned),
    });
    thread.append_message(Message {
        id: "msg-2".to_owned(),
        thread_id: "thread-1".to_owned(),
        sender_id: "2".to_owned(),
        content: "I agree. The wavelength shifts we recorded might suggest a previously undocumented stellar formation process.".to_owned(),
        timestamp: now - Duration::hours(1),
        sentiment: Sentiment::Neutral,
        media_url: None,
    });
    thread.append_message(Message {
        id: "msg-3".to_owned(),
        thread_id: "thread-1".to_owned(),
        sender_id: "3".to_owned(),
        content: "The data looks promising. What concerns me is the gravitational anomaly we detected near the core.".to_owned(),
        timestamp: now - Duration::minutes(30),
        sentiment: Sentiment::Negative,
        media_url: None,
    });

    thread.summary = Some(
        "Team discussing nebula expedition findings including cosmic dust patterns, wavelength shifts suggesting new stellar formation processes, and concerns about gravitational anomalies near the core.".to_owned(),
    );
    thread
}

fn workshop_thread(now: DateTime<Utc>) -> Thread {
    let mut thread = Thread::direct("thread-2", "1", "5", now - Duration::minutes(120));

    thread.append_message(Message {
        id: "msg-4".to_owned(),
        thread_id: "thread-2".to_owned(),
        sender_id: "5".to_owned(),
        content: "Are you joining the quantum resonance workshop tomorrow?".to_owned(),
        timestamp: now - Duration::minutes(120),
        sentiment: Sentiment::Neutral,
        media_url: None,
    });
    thread.append_message(Message {
        id: "msg-5".to_owned(),
        thread_id: "thread-2".to_owned(),
        sender_id: "1".to_owned(),
        content: "Yes! I've been looking forward to it. The new resonance calibration techniques could revolutionize our approach.".to_owned(),
        timestamp: now - Duration::minutes(100),
        sentiment: Sentiment::Positive,
        media_url: None,
    });

    thread.summary = Some(
        "Discussion about attending the quantum resonance workshop and excitement about new calibration techniques.".to_owned(),
    );
    thread
}

/// Fixed participant directory supplied by the host. The core only
/// resolves display names from it.
pub fn user_directory() -> Vec<User> {
    const NAMES: [(&str, &str); 20] = [
        ("1", "Nova"),
        ("2", "Orion"),
        ("3", "Luna"),
        ("4", "Io"),
        ("5", "Celeste"),
        ("6", "Andromeda"),
        ("7", "Quasar"),
        ("8", "Callisto"),
        ("9", "Vega"),
        ("10", "Sol"),
        ("11", "Aurora"),
        ("12", "Cygnus"),
        ("13", "Nebula"),
        ("14", "Lyra"),
        ("15", "Rigel"),
        ("16", "Zenith"),
        ("17", "Hydra"),
        ("18", "Polaris"),
        ("19", "Phoenix"),
        ("20", "Eclipse"),
    ];

    NAMES
        .iter()
        .map(|(id, name)| User {
            id: (*id).to_owned(),
            name: (*name).to_owned(),
            avatar_url: None,
        })
        .collect()
}
