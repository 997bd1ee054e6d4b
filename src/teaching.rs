//! The instructional text that accompanied each visualization, kept as static
//! ordered step sequences with a cursor clamped to the valid range.

use crate::scene::Scene;

pub struct TeachingStep {
    pub title: &'static str,
    pub content: &'static str,
}

/// The teaching steps for a scene, in presentation order
pub fn steps(scene: Scene) -> &'static [TeachingStep] {
    match scene {
        Scene::Fern => &[
            TeachingStep {
                title: "Understanding Recursion in Nature",
                content: "The Barnsley Fern demonstrates how complex natural patterns emerge from simple recursive rules. Each part of the fern is a smaller copy of the whole fern.",
            },
            TeachingStep {
                title: "Four Basic Transformations",
                content: "The fern is created using four simple transformations: Main stem (red), Smaller copies (green), Left leaflet (blue), and Right leaflet (purple). Each transformation creates a smaller copy of the entire pattern.",
            },
            TeachingStep {
                title: "Self-Similarity",
                content: "Notice how each colored section contains a complete miniature version of the fern. This is a key feature of recursive patterns in nature - the whole is made up of smaller copies of itself.",
            },
            TeachingStep {
                title: "Growth Pattern",
                content: "Watch how the pattern builds up over time. Each new point follows one of the four transformations, gradually revealing the complete structure. This mirrors how plants grow in nature.",
            },
        ],
        Scene::KochSnowflake => &[
            TeachingStep {
                title: "Introduction to Koch Snowflake",
                content: "The Koch Snowflake is a fractal curve that demonstrates how simple recursive rules can create infinitely complex shapes. Starting with a triangle, each line is divided into four parts using a simple pattern.",
            },
            TeachingStep {
                title: "The Basic Pattern",
                content: "Each straight line is divided into thirds. The middle third is replaced by two lines forming an equilateral triangle with the removed segment. This process repeats for each new line segment.",
            },
            TeachingStep {
                title: "Infinite Perimeter, Finite Area",
                content: "One of the most fascinating properties of the Koch Snowflake is that while its perimeter becomes infinite as iterations increase, its area remains finite - demonstrating a key concept in fractal mathematics.",
            },
            TeachingStep {
                title: "Natural Connections",
                content: "Similar patterns appear in nature, from coastlines to snowflakes. The principle of creating complex shapes from simple rules is fundamental to how nature builds intricate structures.",
            },
        ],
        Scene::BinaryTree => &[
            TeachingStep {
                title: "Understanding Recursive Branching",
                content: "A binary tree demonstrates how simple recursive rules can create complex natural patterns. Each branch splits into two smaller branches, mimicking patterns found in trees, blood vessels, and neural networks.",
            },
            TeachingStep {
                title: "The Power of Self-Similarity",
                content: "Notice how each branch creates a smaller version of the whole tree. This self-similarity is a key feature of recursive patterns in nature - the same pattern repeats at different scales.",
            },
            TeachingStep {
                title: "Color and Depth",
                content: "The colors change with depth to highlight the recursive levels. Each level gets a different hue, making it easier to see how the pattern builds up through recursive calls.",
            },
            TeachingStep {
                title: "Growth and Mathematics",
                content: "With each increase in depth, the number of branches doubles. This exponential growth (2^n) shows how simple rules can quickly create complex structures - a fundamental principle in both nature and computer science.",
            },
        ],
        Scene::MobiusStrip => &[
            TeachingStep {
                title: "One-Sided Reality",
                content: "The Mobius strip demonstrates how something can appear to have two sides but actually has only one. This challenges our perception of duality and shows how apparent opposites can be unified.",
            },
            TeachingStep {
                title: "Infinite Journey",
                content: "Following the surface of a Mobius strip leads to an endless journey, never crossing an edge. This represents the cyclical nature of existence and the concept of infinity in finite space.",
            },
            TeachingStep {
                title: "Mathematical Wonder",
                content: "By applying a simple twist before connecting the ends of a strip, we create a non-orientable surface. This shows how small changes can fundamentally alter the nature of reality.",
            },
            TeachingStep {
                title: "Beyond Duality",
                content: "Like many concepts in Eastern philosophy, the Mobius strip transcends simple dualism. It shows how apparent opposites (inside/outside, beginning/end) are actually unified.",
            },
        ],
        Scene::KleinBottle => &[
            TeachingStep {
                title: "Beyond 3D Space",
                content: "The Klein bottle is a four-dimensional object that can only exist without self-intersection in 4D space. Our 3D visualization shows a shadow of its true form.",
            },
            TeachingStep {
                title: "No Inside or Outside",
                content: "Like the Mobius strip, but more complex, the Klein bottle has no boundary between inside and outside. This challenges our fundamental concepts of separation and duality.",
            },
            TeachingStep {
                title: "Mathematical Paradox",
                content: "The bottle appears to pass through itself in our 3D view, but in 4D it doesn't intersect. This illustrates how higher dimensions can resolve apparent contradictions.",
            },
            TeachingStep {
                title: "Consciousness and Reality",
                content: "The Klein bottle's properties mirror concepts in Eastern philosophy about the illusion of separation and the interconnected nature of consciousness.",
            },
        ],
    }
}

/// A cursor over a step sequence, clamped to `[0, len - 1]`
pub struct StepCursor {
    index: usize,
    len: usize,
}

impl StepCursor {
    pub fn new(len: usize) -> StepCursor {
        StepCursor { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1).min(self.len.saturating_sub(1));
    }

    pub fn previous(&mut self) {
        self.index = self.index.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scene_has_four_steps() {
        for scene in Scene::ALL {
            assert_eq!(steps(scene).len(), 4);
        }
    }

    #[test]
    fn cursor_clamps_at_both_ends() {
        let mut cursor = StepCursor::new(4);
        cursor.previous();
        assert_eq!(cursor.index(), 0);
        for _ in 0..10 {
            cursor.next();
        }
        assert_eq!(cursor.index(), 3);
    }

    #[test]
    fn cursor_visits_every_step_exactly_once() {
        let steps = steps(Scene::Fern);
        let mut cursor = StepCursor::new(steps.len());
        let mut visited = vec![cursor.index()];
        loop {
            let before = cursor.index();
            cursor.next();
            if cursor.index() == before {
                break;
            }
            visited.push(cursor.index());
        }
        assert_eq!(visited, vec![0, 1, 2, 3]);
    }

    #[test]
    fn empty_sequence_stays_at_zero() {
        let mut cursor = StepCursor::new(0);
        cursor.next();
        assert_eq!(cursor.index(), 0);
    }
}
