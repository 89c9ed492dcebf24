use crate::analytics::activities::ActivityStats;
use crate::analytics::trend::TrendDirection;

/// Generates 0-3 insight sentences from already-computed metrics.
///
/// The rules run in a fixed order and each appends at most one sentence:
/// average-mood tier first (always produces one, first matching tier wins),
/// then the trend (stable stays silent), then the top-ranked activity when
/// its mean mood reaches 7.
pub fn generate_insights(
    average_mood: f64,
    trend: TrendDirection,
    top_activities: &[ActivityStats],
) -> Vec<String> {
    let mut insights = Vec::new();

    if average_mood >= 8.0 {
        insights.push("Excellent! Your mood is consistently high. Keep up the great work!".to_string());
    } else if average_mood >= 6.0 {
        insights.push("Good mood levels! You're maintaining a positive outlook.".to_string());
    } else if average_mood >= 4.0 {
        insights.push(
            "Your mood is moderate. Consider adding more positive activities to your routine."
                .to_string(),
        );
    } else {
        insights.push(
            "Your mood has been low. Consider reaching out to friends, family, or a mental health professional."
                .to_string(),
        );
    }

    match trend {
        TrendDirection::Improving => insights.push(
            "Great news! Your mood has been improving recently. Whatever you're doing, keep it up!"
                .to_string(),
        ),
        TrendDirection::Declining => insights.push(
            "Your mood has been declining. Try to identify what might be causing this and consider positive coping strategies."
                .to_string(),
        ),
        TrendDirection::Stable => {}
    }

    if let Some(top) = top_activities.first() {
        if top.avg_mood >= 7.0 {
            insights.push(format!(
                "{} seems to really boost your mood! Consider doing it more often.",
                top.activity.name
            ));
        }
    }

    insights
}
