use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use rand::Rng;

use crate::usecases::contracts::IdGenerator;

const SUFFIX_LEN: usize = 6;
const SUFFIX_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Produces collision-resistant ids of the form
/// `<prefix>-<unix-millis>-<6 base36 chars>`.
///
/// The millisecond component never moves backwards within a process even
/// if the wall clock does; the random suffix covers multiple ids minted
/// in the same millisecond. No uniqueness is claimed across processes.
#[derive(Debug, Default)]
pub struct SystemIdGenerator {
    last_millis: AtomicI64,
}

impl IdGenerator for SystemIdGenerator {
    fn new_id(&self, prefix: &str) -> String {
        let now_millis = Utc::now().timestamp_millis();
        let previous = self.last_millis.fetch_max(now_millis, Ordering::Relaxed);
        let millis = previous.max(now_millis);

        let mut rng = rand::thread_rng();
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| SUFFIX_CHARSET[rng.gen_range(0..SUFFIX_CHARSET.len())] as char)
            .collect();

        format!("{prefix}-{millis}-{suffix}")
    }
}
