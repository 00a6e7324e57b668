use crate::analyzers::score::{chill_score, is_trap_course};
use crate::analyzers::types::{Course, CourseKey, Review, TeacherGroup};
use crate::analyzers::utility::average_rating;
use crate::config::ScoringKeywords;
use crate::normalize::ReviewRecord;
use indexmap::IndexMap;
use tracing::debug;

/// A course still collecting reviews.
#[derive(Debug, Clone)]
struct CourseEntry {
    name: String,
    teachers: IndexMap<String, Vec<Review>>,
}

/// Groups normalized records by course, then by teacher, in first-seen order.
#[derive(Debug, Default)]
pub struct CourseAggregator {
    courses: IndexMap<CourseKey, CourseEntry>,
}

impl CourseAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one record in.
    ///
    /// The course and teacher entries are created even when the review is
    /// unrated; only rated reviews are kept. A course keeps the name it was
    /// first seen with.
    pub fn add(&mut self, record: ReviewRecord) {
        let ReviewRecord {
            key,
            course_name,
            teacher,
            review,
        } = record;

        let entry = self.courses.entry(key).or_insert_with_key(|key| {
            debug!(course = %key, name = %course_name, "New course");
            CourseEntry {
                name: course_name,
                teachers: IndexMap::new(),
            }
        });

        let reviews = entry.teachers.entry(teacher).or_default();
        if review.rating.is_some() {
            reviews.push(review);
        }
    }

    /// Number of distinct courses seen so far, rated or not.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Computes every course's statistics and drops courses with no rated reviews.
    pub fn finalize(self, keywords: &ScoringKeywords) -> Vec<Course> {
        self.courses
            .into_iter()
            .map(|(key, entry)| finalize_course(key, entry, keywords))
            .filter(|course| course.review_count > 0)
            .collect()
    }
}

fn finalize_course(key: CourseKey, entry: CourseEntry, keywords: &ScoringKeywords) -> Course {
    let teachers: IndexMap<String, TeacherGroup> = entry
        .teachers
        .into_iter()
        .map(|(name, reviews)| {
            let avg_rating = average_rating(reviews.iter().map(|r| r.rating));
            (
                name,
                TeacherGroup {
                    reviews,
                    avg_rating,
                },
            )
        })
        .collect();

    let all_reviews: Vec<&Review> = teachers.values().flat_map(|t| &t.reviews).collect();
    let avg_rating = average_rating(all_reviews.iter().map(|r| r.rating));
    let chill_score = chill_score(all_reviews.iter().copied(), keywords);
    let is_trap_course = is_trap_course(avg_rating, all_reviews.iter().copied(), keywords);
    let review_count = all_reviews.len();

    Course {
        id: key.id(),
        course_type: key.type_tag().to_string(),
        name: entry.name,
        teachers,
        avg_rating,
        chill_score,
        is_trap_course,
        review_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        type_tag: &str,
        id: i64,
        name: &str,
        teacher: &str,
        rating: Option<i64>,
        text: &str,
    ) -> ReviewRecord {
        ReviewRecord {
            key: CourseKey::new(type_tag, id),
            course_name: name.to_string(),
            teacher: teacher.to_string(),
            review: Review {
                rating,
                review: text.to_string(),
                study_time: String::new(),
            },
        }
    }

    #[test]
    fn test_first_name_wins() {
        let mut agg = CourseAggregator::new();
        agg.add(record("fec", 1, "Basics", "A", Some(8), ""));
        agg.add(record("FEC", 1, "Basics Renamed", "A", Some(6), ""));

        let courses = agg.finalize(&ScoringKeywords::default());
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].name, "Basics");
        assert_eq!(courses[0].id, 1);
        assert_eq!(courses[0].course_type, "FEC");
    }

    #[test]
    fn test_course_average_is_over_all_reviews() {
        let mut agg = CourseAggregator::new();
        agg.add(record("fec", 1, "Basics", "A", Some(10), ""));
        agg.add(record("fec", 1, "Basics", "B", Some(4), ""));
        agg.add(record("fec", 1, "Basics", "B", Some(6), ""));

        let courses = agg.finalize(&ScoringKeywords::default());
        let course = &courses[0];
        assert_eq!(course.teachers["A"].avg_rating, 10.0);
        assert_eq!(course.teachers["B"].avg_rating, 5.0);
        // (10 + 4 + 6) / 3, not the mean of the teacher averages.
        assert_eq!(course.avg_rating, 6.67);
        assert_eq!(course.review_count, 3);
    }

    #[test]
    fn test_unrated_rows_are_not_retained() {
        let mut agg = CourseAggregator::new();
        agg.add(record("fec", 1, "Basics", "A", Some(7), ""));
        agg.add(record("fec", 1, "Basics", "B", None, "strict"));

        let courses = agg.finalize(&ScoringKeywords::default());
        let course = &courses[0];
        assert_eq!(course.review_count, 1);
        assert_eq!(course.teachers.len(), 2);
        assert!(course.teachers["B"].reviews.is_empty());
        assert_eq!(course.teachers["B"].avg_rating, 0.0);
        assert_eq!(course.chill_score, 5.0);
    }

    #[test]
    fn test_courses_without_ratings_are_dropped() {
        let mut agg = CourseAggregator::new();
        assert!(agg.is_empty());
        agg.add(record("fec", 1, "Basics", "A", None, ""));
        agg.add(record("fec", 2, "Dance", "A", Some(9), ""));
        assert!(!agg.is_empty());
        assert_eq!(agg.len(), 2);

        let courses = agg.finalize(&ScoringKeywords::default());
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].id, 2);
    }

    #[test]
    fn test_first_seen_order() {
        let mut agg = CourseAggregator::new();
        agg.add(record("fec", 3, "C", "Z", Some(5), ""));
        agg.add(record("fec", 1, "A", "Y", Some(5), ""));
        agg.add(record("fec", 3, "C", "X", Some(5), ""));

        let courses = agg.finalize(&ScoringKeywords::default());
        let ids: Vec<i64> = courses.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 1]);
        let teachers: Vec<&str> = courses[0].teachers.keys().map(String::as_str).collect();
        assert_eq!(teachers, vec!["Z", "X"]);
    }

    #[test]
    fn test_trap_flag_uses_course_average() {
        let mut agg = CourseAggregator::new();
        agg.add(record("fec", 1, "Bad", "A", Some(2), "avoid this"));
        agg.add(record("fec", 1, "Bad", "A", Some(3), ""));
        agg.add(record("fec", 2, "Fine", "A", Some(8), "avoid the back bench"));

        let courses = agg.finalize(&ScoringKeywords::default());
        assert!(courses[0].is_trap_course);
        assert!(!courses[1].is_trap_course);
    }
}
