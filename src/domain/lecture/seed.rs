//! Seed library shown on first run

use chrono::Utc;

use super::record::{Lecture, LectureId};

/// Example records used when nothing has been stored yet, or when the
/// stored library is unreadable.
pub fn seed_lectures() -> Vec<Lecture> {
    vec![
        Lecture {
            id: LectureId::from("1"),
            title: "Introduction to Psychology - Week 3".to_string(),
            processed_at: "2 hours ago".to_string(),
            duration: "45 mins".to_string(),
            file_name: "psico_clase_03.mp3".to_string(),
            file_size: 45_000_000,
            transcript: Some(
                "Welcome to class. Today we are going to dive into the history of \
                 behaviorist psychology..."
                    .to_string(),
            ),
            summary: Some(
                "### Key Takeaways\n\
                 - Focus on Pavlov and Skinner\n\
                 - Classical vs. operant conditioning\n\
                 - Historical context of 20th century psychology"
                    .to_string(),
            ),
            created_at: Utc::now(),
        },
        Lecture {
            id: LectureId::from("2"),
            title: "Advanced Macroeconomics - Class 05".to_string(),
            processed_at: "Yesterday".to_string(),
            duration: "1h 12m".to_string(),
            file_name: "macro_05.wav".to_string(),
            file_size: 120_000_000,
            transcript: Some(
                "Let's start by reviewing the IS-LM model we discussed in the last \
                 session..."
                    .to_string(),
            ),
            summary: Some(
                "### Summary\n\
                 1. Review of the IS-LM model\n\
                 2. Shift towards open-economy macroeconomics\n\
                 3. Impact of floating exchange rates on national policy"
                    .to_string(),
            ),
            created_at: Utc::now(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_two_records() {
        let seed = seed_lectures();
        assert_eq!(seed.len(), 2);
    }

    #[test]
    fn seed_ids_are_unique() {
        let seed = seed_lectures();
        assert_ne!(seed[0].id, seed[1].id);
    }

    #[test]
    fn seed_records_carry_transcripts_and_summaries() {
        for lecture in seed_lectures() {
            assert!(lecture.transcript.is_some());
            assert!(lecture.summary.is_some());
        }
    }
}
