#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Error;
use anyhow::Result;
use chrono::Local;
use chrono::NaiveDate;
use ratatui::prelude::Rect;

use super::BubbleList;
use super::Navigation;
use super::Persistence;
use super::Scroll;
use super::Transition;
use crate::domain::models::AiContentType;
use crate::domain::models::AiInteraction;
use crate::domain::models::AttendanceStatus;
use crate::domain::models::Level;
use crate::domain::models::Message;
use crate::domain::models::ProgressRecord;
use crate::domain::models::ProgressStatus;
use crate::domain::models::Rejection;
use crate::domain::models::Role;
use crate::domain::models::Roster;
use crate::domain::models::Section;
use crate::domain::models::Student;
use crate::domain::models::Summary;

pub fn today() -> NaiveDate {
    return Local::now().date_naive();
}

/// The AI modal, opened for a single student.
pub struct AiPanel {
    pub student_id: String,
    pub student_name: String,
    pub content_type: AiContentType,
    pub result: Option<String>,
}

pub struct AppState {
    pub roster: Roster,
    pub chat: Vec<Message>,
    pub navigation: Navigation,
    pub cursor: usize,
    pub ai_panel: Option<AiPanel>,
    pub alert: Option<String>,
    pub bubble_list: BubbleList,
    pub scroll: Scroll,
    pub last_known_width: u16,
    pub last_known_height: u16,
    persistence: Persistence,
}

impl AppState {
    pub async fn new(persistence: Persistence, section: Section) -> Result<AppState> {
        let roster = persistence.load_roster().await?;
        let chat = persistence.load_chat().await?;
        tracing::debug!(
            students = roster.len(),
            messages = chat.len(),
            section = %section,
            "Loaded state"
        );

        let mut app_state = AppState {
            roster,
            chat,
            navigation: Navigation::new(section),
            cursor: 0,
            ai_panel: None,
            alert: None,
            bubble_list: BubbleList::default(),
            scroll: Scroll::default(),
            last_known_width: 0,
            last_known_height: 0,
            persistence,
        };
        app_state.switch_section(section);

        return Ok(app_state);
    }

    pub fn summary(&self) -> Summary {
        return self.roster.summary();
    }

    /// Turns a rejected operation into a blocking alert. Anything else, such
    /// as a storage failure, is handed back to the caller.
    pub fn alert_on_rejection(&mut self, err: Error) -> Result<()> {
        if let Some(rejection) = err.downcast_ref::<Rejection>() {
            tracing::debug!(%rejection, "Operation rejected");
            self.alert = Some(rejection.to_string());
            return Ok(());
        }

        return Err(err);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn switch_section(&mut self, section: Section) {
        let transition = self.navigation.switch(section);
        self.after_transition(transition);
    }

    pub fn next_section(&mut self) {
        let transition = self.navigation.next();
        self.after_transition(transition);
    }

    pub fn previous_section(&mut self) {
        let transition = self.navigation.previous();
        self.after_transition(transition);
    }

    fn after_transition(&mut self, transition: Transition) {
        if transition == Transition::EnteredChat {
            self.sync_chat();
            self.scroll.last();
        }
    }

    pub fn select_next(&mut self) {
        if self.cursor + 1 < self.roster.len() {
            self.cursor += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn selected_student_id(&self) -> Result<String> {
        match self.roster.students.get(self.cursor) {
            Some(student) => return Ok(student.id.to_string()),
            None => return Err(Rejection::NoStudentSelected.into()),
        }
    }

    fn student_mut(&mut self, id: &str) -> Result<&mut Student> {
        return self
            .roster
            .get_mut(id)
            .ok_or_else(|| return Rejection::StudentNotFound(id.to_string()).into());
    }

    async fn save_roster(&self) -> Result<()> {
        return self.persistence.save_roster(&self.roster).await;
    }

    async fn save_chat(&self) -> Result<()> {
        return self.persistence.save_chat(&self.chat).await;
    }

    pub async fn add_student(&mut self, name: &str, age: &str, level: Level) -> Result<String> {
        let (name, age) = Student::parse_intake(name, age)?;
        let student = Student::new(&name, age, level, today());
        let id = student.id.to_string();

        self.roster.add(student);
        self.save_roster().await?;
        tracing::debug!(student_id = %id, %level, "Added student");

        return Ok(id);
    }

    pub async fn remove_student(&mut self, id: &str) -> Result<()> {
        let removed = self.roster.remove(id);
        self.save_roster().await?;
        tracing::debug!(student_id = id, removed, "Removed student");

        if self.cursor >= self.roster.len() {
            self.cursor = self.roster.len().saturating_sub(1);
        }
        if let Some(panel) = &self.ai_panel {
            if panel.student_id == id {
                self.ai_panel = None;
            }
        }

        return Ok(());
    }

    pub async fn record_attendance(&mut self, id: &str, status: AttendanceStatus) -> Result<()> {
        return self.record_attendance_on(id, status, today()).await;
    }

    pub async fn record_attendance_on(
        &mut self,
        id: &str,
        status: AttendanceStatus,
        date: NaiveDate,
    ) -> Result<()> {
        self.student_mut(id)?.mark_attendance(status, date)?;
        self.save_roster().await?;
        tracing::debug!(student_id = id, %status, %date, "Recorded attendance");

        return Ok(());
    }

    /// An unset status, like the placeholder entry of a selector, is ignored.
    pub async fn record_progress(&mut self, id: &str, status: Option<ProgressStatus>) -> Result<()> {
        let status = match status {
            Some(status) => status,
            None => return Ok(()),
        };

        self.student_mut(id)?.progress.push(ProgressRecord {
            date: today(),
            status,
        });
        self.save_roster().await?;
        tracing::debug!(student_id = id, %status, "Recorded progress");

        return Ok(());
    }

    pub fn open_ai_panel(&mut self, id: &str) -> Result<()> {
        let student = self
            .roster
            .get(id)
            .ok_or_else(|| return Rejection::StudentNotFound(id.to_string()))?;

        self.ai_panel = Some(AiPanel {
            student_id: student.id.to_string(),
            student_name: student.name.to_string(),
            content_type: AiContentType::default(),
            result: None,
        });

        return Ok(());
    }

    pub fn close_ai_panel(&mut self) {
        self.ai_panel = None;
    }

    pub fn cycle_ai_content_type(&mut self, forward: bool) {
        if let Some(panel) = &mut self.ai_panel {
            if forward {
                panel.content_type = panel.content_type.next();
            } else {
                panel.content_type = panel.content_type.previous();
            }
        }
    }

    /// Records a simulated AI interaction and returns the generated text.
    pub async fn record_ai_interaction(
        &mut self,
        id: &str,
        content_type: AiContentType,
        topic: &str,
    ) -> Result<String> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(Rejection::MissingTopic.into());
        }

        let student = self.student_mut(id)?;
        let interaction = AiInteraction::simulate(&student.name, content_type, topic, today());
        let content = interaction.content.to_string();
        student.ai_history.push(interaction);

        self.save_roster().await?;
        tracing::debug!(student_id = id, %content_type, "Recorded AI interaction");

        return Ok(content);
    }

    /// Generates content for the student targeted by the open AI panel.
    pub async fn generate_ai_content(&mut self, topic: &str) -> Result<()> {
        let (id, content_type) = match &self.ai_panel {
            Some(panel) => (panel.student_id.to_string(), panel.content_type),
            None => return Ok(()),
        };

        let content = self.record_ai_interaction(&id, content_type, topic).await?;
        if let Some(panel) = &mut self.ai_panel {
            panel.result = Some(content);
        }

        return Ok(());
    }

    pub async fn send_message(&mut self, text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }

        self.chat.push(Message::new(Role::User, text));
        self.chat.push(Message::simulated_reply(text));
        self.save_chat().await?;
        tracing::debug!(messages = self.chat.len(), "Sent chat message");

        self.sync_chat();
        self.scroll.last();

        return Ok(());
    }

    pub async fn clear_chat(&mut self) -> Result<()> {
        self.chat = vec![];
        self.save_chat().await?;
        tracing::debug!("Cleared chat");

        self.sync_chat();
        self.scroll.last();

        return Ok(());
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_chat();
    }

    fn sync_chat(&mut self) {
        self.bubble_list
            .set_messages(&self.chat, usize::from(self.last_known_width));

        let lines_len = u16::try_from(self.bubble_list.len()).unwrap_or(u16::MAX);
        self.scroll.set_state(lines_len, self.last_known_height);
    }
}
