use std::env;

pub fn insta_snapshot<F: FnOnce()>(f: F) {
    let mut settings = insta::Settings::clone_current();
    let snapshot_path = env::current_dir().unwrap().join("./test/snapshots");
    settings.set_snapshot_path(snapshot_path);
    settings.bind(f);
}

/// A stored roster with two students, as it would be found in the data
/// directory after a couple of days of use.
pub fn roster_fixture() -> &'static str {
    return r#"
{
  "students": [
    {
      "id": "5f0c8a1e-3d0b-4f57-9a52-0c6f1d1a2b3c",
      "name": "Ana Torres",
      "age": 12,
      "level": "Level 1",
      "registered_on": "2026-10-12",
      "attendance": [
        { "date": "2026-10-12", "status": "Present" },
        { "date": "2026-10-13", "status": "Absent" }
      ],
      "progress": [
        { "date": "2026-10-12", "status": "In progress" }
      ],
      "ai_history": [
        {
          "date": "2026-10-13",
          "content_type": "exercises",
          "topic": "fractions",
          "content": "AI simulation: generating exercises about \"fractions\" for Ana Torres"
        }
      ]
    },
    {
      "id": "9b7e44d2-61c5-4c1e-8f0a-7d2e5b6c4a10",
      "name": "Luis Romero",
      "age": 14,
      "level": "Level 3",
      "registered_on": "2026-10-13",
      "attendance": [
        { "date": "2026-10-13", "status": "Present" }
      ],
      "progress": [
        { "date": "2026-10-13", "status": "Mastered" },
        { "date": "2026-10-14", "status": "Needs reinforcement" }
      ],
      "ai_history": []
    }
  ]
}
"#
    .trim();
}

pub fn chat_fixture() -> &'static str {
    return r#"
[
  { "role": "user", "content": "How do I introduce fractions?" },
  { "role": "assistant", "content": "AI simulation: received your message -> How do I introduce fractions?" }
]
"#
    .trim();
}
