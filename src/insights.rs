//! Views over a finished report used by the `inspect` command.

use crate::analyzers::types::Course;

/// A course needs this many reviews to count as popular.
pub const POPULAR_MIN_REVIEWS: usize = 10;
pub const POPULAR_MIN_RATING: f64 = 7.0;

/// Ratings at or above this count as a recommendation.
pub const RECOMMEND_THRESHOLD: i64 = 7;

pub const CHILL_TAG_MIN: f64 = 8.0;
pub const INTENSIVE_TAG_MAX: f64 = 3.0;
pub const HIGHLY_RATED_MIN: f64 = 8.5;

/// Course names that mark an activity course graded without a written exam.
static NO_EXAM_NAME_HINTS: &[&str] = &["sports", "public speaking"];

/// Flagged trap courses, worst rated first.
pub fn trap_courses(courses: &[Course]) -> Vec<&Course> {
    let mut traps: Vec<&Course> = courses.iter().filter(|c| c.is_trap_course).collect();
    traps.sort_by(|a, b| a.avg_rating.total_cmp(&b.avg_rating));
    traps
}

/// Well reviewed and well rated, most reviewed first.
pub fn popular_courses(courses: &[Course], limit: usize) -> Vec<&Course> {
    let mut popular: Vec<&Course> = courses
        .iter()
        .filter(|c| c.review_count >= POPULAR_MIN_REVIEWS && c.avg_rating >= POPULAR_MIN_RATING)
        .collect();
    popular.sort_by(|a, b| b.review_count.cmp(&a.review_count));
    popular.truncate(limit);
    popular
}

pub fn chillest_courses(courses: &[Course], limit: usize) -> Vec<&Course> {
    let mut chill: Vec<&Course> = courses.iter().collect();
    chill.sort_by(|a, b| b.chill_score.total_cmp(&a.chill_score));
    chill.truncate(limit);
    chill
}

/// Percentage of rated reviews at or above [`RECOMMEND_THRESHOLD`], rounded.
pub fn recommendation_percentage(course: &Course) -> u32 {
    let (rated, recommended) = course
        .reviews()
        .filter_map(|r| r.rating)
        .fold((0u32, 0u32), |(rated, rec), rating| {
            (rated + 1, rec + u32::from(rating >= RECOMMEND_THRESHOLD))
        });

    if rated == 0 {
        return 0;
    }
    (f64::from(recommended) * 100.0 / f64::from(rated)).round() as u32
}

pub fn has_no_exam(course: &Course) -> bool {
    let name = course.name.to_lowercase();
    NO_EXAM_NAME_HINTS.iter().any(|hint| name.contains(hint))
}

/// Descriptive tags derived from a course's scores and name.
///
/// | Tag            | Condition             |
/// |----------------|-----------------------|
/// | `no-exam`      | [`has_no_exam`]       |
/// | `chill`        | chill score >= 8      |
/// | `intensive`    | chill score <= 3      |
/// | `highly-rated` | average rating >= 8.5 |
pub fn course_tags(course: &Course) -> Vec<&'static str> {
    let mut tags = Vec::new();
    if has_no_exam(course) {
        tags.push("no-exam");
    }
    if course.chill_score >= CHILL_TAG_MIN {
        tags.push("chill");
    }
    if course.chill_score <= INTENSIVE_TAG_MAX {
        tags.push("intensive");
    }
    if course.avg_rating >= HIGHLY_RATED_MIN {
        tags.push("highly-rated");
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::types::{Review, TeacherGroup};
    use indexmap::IndexMap;

    fn course(id: i64, ratings: &[i64], chill_score: f64, is_trap_course: bool) -> Course {
        let reviews: Vec<Review> = ratings
            .iter()
            .map(|&r| Review {
                rating: Some(r),
                review: String::new(),
                study_time: String::new(),
            })
            .collect();
        let avg = if ratings.is_empty() {
            0.0
        } else {
            ratings.iter().sum::<i64>() as f64 / ratings.len() as f64
        };

        let mut teachers = IndexMap::new();
        teachers.insert(
            "Unknown".to_string(),
            TeacherGroup {
                reviews,
                avg_rating: avg,
            },
        );

        Course {
            id,
            course_type: "FEC".into(),
            name: format!("Course {id}"),
            teachers,
            avg_rating: avg,
            chill_score,
            is_trap_course,
            review_count: ratings.len(),
        }
    }

    #[test]
    fn test_trap_courses_worst_first() {
        let courses = vec![
            course(1, &[5], 5.0, true),
            course(2, &[9], 5.0, false),
            course(3, &[2], 5.0, true),
        ];
        let ids: Vec<i64> = trap_courses(&courses).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_popular_requires_volume_and_rating() {
        let courses = vec![
            course(1, &[8; 12], 5.0, false),
            course(2, &[9; 3], 5.0, false),
            course(3, &[5; 20], 5.0, false),
            course(4, &[7; 15], 5.0, false),
        ];
        let ids: Vec<i64> = popular_courses(&courses, 10).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![4, 1]);

        assert_eq!(popular_courses(&courses, 1).len(), 1);
    }

    #[test]
    fn test_chillest_courses() {
        let courses = vec![
            course(1, &[5], 4.0, false),
            course(2, &[5], 9.5, false),
            course(3, &[5], 6.0, false),
        ];
        let ids: Vec<i64> = chillest_courses(&courses, 2).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_recommendation_percentage() {
        assert_eq!(recommendation_percentage(&course(1, &[7, 9, 3], 5.0, false)), 67);
        assert_eq!(recommendation_percentage(&course(2, &[], 5.0, false)), 0);
        assert_eq!(recommendation_percentage(&course(3, &[10, 8], 5.0, false)), 100);
    }

    #[test]
    fn test_course_tags() {
        let relaxed = course(1, &[9, 9], 8.5, false);
        assert_eq!(course_tags(&relaxed), ["chill", "highly-rated"]);

        let hard = course(2, &[4], 2.0, true);
        assert_eq!(course_tags(&hard), ["intensive"]);

        let middling = course(3, &[7], 5.0, false);
        assert!(course_tags(&middling).is_empty());
    }

    #[test]
    fn test_no_exam_from_name() {
        let mut speaking = course(1, &[8], 5.0, false);
        speaking.name = "Public Speaking and Debate".into();
        assert!(has_no_exam(&speaking));
        assert_eq!(course_tags(&speaking), ["no-exam"]);

        let mut sports = course(2, &[9], 8.0, false);
        sports.name = "SPORTS".into();
        assert_eq!(course_tags(&sports), ["no-exam", "chill", "highly-rated"]);

        assert!(!has_no_exam(&course(3, &[8], 5.0, false)));
    }
}
