// Course catalog: the fixed, ordered set of course records shown on screen.

/// One immutable course record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub title: String,
    pub code: String,
    /// Signed on purpose: bad data must still render, not fail to construct.
    pub credit_hours: i32,
    pub description: String,
    /// Free text; "None" when a course has no prerequisites.
    pub prerequisites: String,
}

impl Course {
    pub fn new(
        title: impl Into<String>,
        code: impl Into<String>,
        credit_hours: i32,
        description: impl Into<String>,
        prerequisites: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            code: code.into(),
            credit_hours,
            description: description.into(),
            prerequisites: prerequisites.into(),
        }
    }
}

/// Read-only ordered sequence of courses. Built once, never edited.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// The compiled-in catalog.
    pub fn sample() -> Self {
        Self::new(vec![
            Course::new(
                "Calculus I",
                "MATH101",
                3,
                "Introduction to calculus concepts and techniques.",
                "None",
            ),
            Course::new(
                "Introduction to Programming",
                "CS101",
                4,
                "Learn the basics of programming using Kotlin.",
                "None",
            ),
            Course::new(
                "Data Structures",
                "CS201",
                3,
                "In-depth study of stacks, queues, trees, and graphs.",
                "CS101",
            ),
            Course::new(
                "Discrete Mathematics",
                "MATH102",
                3,
                "Explore mathematical structures and proofs.",
                "None",
            ),
            Course::new(
                "Operating Systems",
                "CS301",
                4,
                "Study the design and implementation of modern operating systems.",
                "CS201",
            ),
            Course::new(
                "Mobile App Development",
                "CS350",
                3,
                "Build modern Android apps using Jetpack Compose and Kotlin.",
                "CS201",
            ),
        ])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Course> {
        self.courses.iter()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Course;
    type IntoIter = std::slice::Iter<'a, Course>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
