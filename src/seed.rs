//! The built-in default task seed: 33 tasks across the eight groups.
//!
//! Reset restores this list verbatim, completion state included.

use crate::task::{Category, Task, TaskGroup};

fn seed(id: u32, text: &str, group: TaskGroup) -> Task {
    Task {
        id: id.to_string(),
        text: text.to_string(),
        completed: false,
        category: Category::Default,
        group,
    }
}

/// The fixed default seed
pub fn default_tasks() -> Vec<Task> {
    use TaskGroup::*;
    vec![
        seed(1, "Declutter your desk or workspace", OrganizeYourSpace),
        seed(2, "Keep only essential items within reach", OrganizeYourSpace),
        seed(
            3,
            "Clear out or organize digital clutter (emails, desktop files)",
            OrganizeYourSpace,
        ),
        seed(4, "Create a designated space for relaxation", OrganizeYourSpace),
        seed(5, "List all tasks in order of importance", PrioritizeTasks),
        seed(
            6,
            "Break down larger tasks into smaller, manageable steps",
            PrioritizeTasks,
        ),
        seed(
            7,
            "Limit your to-do list to a realistic number of daily tasks",
            PrioritizeTasks,
        ),
        seed(8, "Identify and eliminate low-priority activities", PrioritizeTasks),
        seed(
            9,
            "Silence non-essential notifications on your devices",
            TechnologyBoundaries,
        ),
        seed(
            10,
            "Set specific times for checking emails and messages",
            TechnologyBoundaries,
        ),
        seed(
            11,
            "Designate \"no-screen\" times, especially before bed",
            TechnologyBoundaries,
        ),
        seed(12, "Unsubscribe from unneeded mailing lists", TechnologyBoundaries),
        seed(
            13,
            "Start with 5\u{2013}10 minutes of mindful breathing or meditation",
            Mindfulness,
        ),
        seed(14, "Focus on being fully present in each moment", Mindfulness),
        seed(
            15,
            "Let go of lingering thoughts by acknowledging and releasing them",
            Mindfulness,
        ),
        seed(
            16,
            "Schedule specific times to read the news or social media",
            InformationManagement,
        ),
        seed(
            17,
            "Choose one or two trusted sources for information",
            InformationManagement,
        ),
        seed(
            18,
            "Avoid multitasking between information sources",
            InformationManagement,
        ),
        seed(
            19,
            "Write down any nagging thoughts or tasks in a journal",
            BrainDumpGoals,
        ),
        seed(
            20,
            "Clear your mind by listing out things you don't want to forget",
            BrainDumpGoals,
        ),
        seed(
            21,
            "Review your brain dump weekly and organize into actionable items",
            BrainDumpGoals,
        ),
        seed(22, "Define short-term and long-term goals", BrainDumpGoals),
        seed(
            23,
            "Ensure goals are specific, measurable, and achievable",
            BrainDumpGoals,
        ),
        seed(
            24,
            "Keep a daily reminder of your main goal to stay focused",
            BrainDumpGoals,
        ),
        seed(
            25,
            "Use the Pomodoro technique (25-minute work intervals)",
            BreaksSelfCare,
        ),
        seed(
            26,
            "Stand up, stretch, or walk around to reset your mind",
            BreaksSelfCare,
        ),
        seed(27, "Avoid skipping breaks, even during busy times", BreaksSelfCare),
        seed(
            28,
            "Write down 3 things you're grateful for each day",
            GratitudeBoundaries,
        ),
        seed(
            29,
            "Shift focus to positive aspects of life to reduce worry",
            GratitudeBoundaries,
        ),
        seed(
            30,
            "Use gratitude to ground yourself in the present moment",
            GratitudeBoundaries,
        ),
        seed(
            31,
            "Learn to say \"no\" to tasks that don't align with your goals",
            GratitudeBoundaries,
        ),
        seed(
            32,
            "Reassess commitments regularly and cut unnecessary ones",
            GratitudeBoundaries,
        ),
        seed(
            33,
            "Focus on quality rather than quantity in your commitments",
            GratitudeBoundaries,
        ),
    ]
}
