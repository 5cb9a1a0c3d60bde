//! Canned assistant texts.
//!
//! Replies use `**bold**` markers; the renderer decides how to show them.

use super::intent::Category;

/// First message of every session, before the user says anything.
pub const WELCOME_MESSAGE: &str = "Hello! I'm your Nexus AI assistant. I can help you navigate campus life, check your schedule, find nearby spots, and more. What would you like to know?";

/// Canned utterances offered while a session has no user turns yet.
pub const SUGGESTION_CHIPS: [&str; 5] = [
    "Today's mess menu",
    "My classes today",
    "Places near campus",
    "Pending assignments",
    "Available cab pools",
];

const MESS: &str = "Here's today's mess schedule:\n\n**Breakfast** (7:30-9:30 AM): Aloo Paratha, Curd, Boiled Eggs, Toast & Butter, Tea/Coffee\n**Lunch** (12:00-2:00 PM): Rajma Chawal, Chicken Curry, Mixed Veg, Roti, Gulab Jamun\n**Snacks** (4:30-6:00 PM): Samosa, Tea, Biscuits\n**Dinner** (7:30-9:30 PM): Paneer Butter Masala, Fish Fry, Dal Tadka, Naan, Ice Cream\n\nLunch is rated 3.8/5 today. Would you like nutritional details for any meal?";

const SCHEDULE: &str = "Here are today's classes (Friday):\n\n1. **Data Structures & Algorithms** - 09:00-10:00, LH-1 (Dr. Sharma)\n2. **Linear Algebra** - 11:00-12:00, LH-3 (Dr. Gupta)\n\nYou have 2 classes today with no cancellations. Your next class is DSA at 9 AM. Need help finding the lecture hall?";

const NEARBY: &str = "Here are some popular spots near campus:\n\n1. **Chai Point** (0.5 km) - Budget-friendly, study-friendly. Rating: 4.3/5. Student discount available!\n2. **The Study Nook** (0.8 km) - Quiet workspace with great coffee. Rating: 4.5/5\n3. **Satluj View Restaurant** (1.2 km) - Great river view. Rating: 4.1/5\n4. **Tandoori Nights** (1.8 km) - Premium tandoori. Rating: 4.4/5\n\nWould you like directions to any of these?";

const ASSIGNMENTS: &str = "You have **4 pending assignments**:\n\n1. **Binary Tree Operations** (CS201) - Due Feb 20\n2. **Graph Algorithms** (CS201) - Due Mar 5\n3. **Eigenvalues & Eigenvectors** (MA201) - Due Feb 22\n4. **Flip-Flop Circuits** (EE201) - Due Feb 25\n\nThe Binary Tree assignment is due first. Would you like me to help you plan your study schedule?";

const CABPOOL: &str = "Here are available cab pools:\n\n1. **IIT Ropar to Chandigarh** - Feb 7, 6 AM (2 seats, Rs 350/seat)\n2. **IIT Ropar to Delhi** - Feb 8, 5:30 AM (3 seats, Rs 600/seat)\n3. **IIT Ropar to Rupnagar** - Today, 4 PM (2 seats, Rs 100/seat)\n\nWould you like to join any of these rides?";

const LOSTFOUND: &str = "Recent Lost & Found updates:\n\n**Lost Items:**\n- Blue JBL Headphones (near Library) - Feb 5\n- Black Leather Wallet (Sports Complex) - Feb 4\n\n**Found Items:**\n- Student ID Card (Main Cafeteria) - Today\n- TI-84 Calculator (Lecture Hall 3) - Today\n\nHave you lost or found something? I can help you file a report.";

const GREETING: &str = "Hello! I'm your Nexus AI Assistant. I can help you with:\n\n- **Mess menu** - What's being served today\n- **Timetable** - Your class schedule\n- **Assignments** - Pending tasks and deadlines\n- **Nearby places** - Restaurants, cafes, study spots\n- **Cab pools** - Available rides\n- **Lost & Found** - Report or find items\n\nWhat would you like to know?";

const FALLBACK: &str = "I can help you navigate campus life! Try asking me about:\n\n- Today's mess menu or meal ratings\n- Your class schedule and cancellations\n- Pending assignments and deadlines\n- Nearby restaurants and study spots\n- Available cab pool rides\n- Lost and found items\n\nWhat would you like to know?";

/// Response template for a category
pub fn response_for(category: Category) -> &'static str {
    match category {
        Category::Mess => MESS,
        Category::Schedule => SCHEDULE,
        Category::Nearby => NEARBY,
        Category::Assignments => ASSIGNMENTS,
        Category::Cabpool => CABPOOL,
        Category::Lostfound => LOSTFOUND,
        Category::Greeting => GREETING,
        Category::Fallback => FALLBACK,
    }
}

/// Looks up a suggestion chip by its 1-based position as shown to the user.
pub fn suggestion(position: usize) -> Option<&'static str> {
    position
        .checked_sub(1)
        .and_then(|index| SUGGESTION_CHIPS.get(index))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_is_distinct_and_non_empty() {
        let mut seen = std::collections::HashSet::new();
        for category in Category::ALL {
            let text = response_for(category);
            assert!(!text.trim().is_empty(), "empty template for {}", category);
            assert!(seen.insert(text), "duplicate template for {}", category);
        }
    }

    #[test]
    fn test_suggestion_positions() {
        assert_eq!(suggestion(1), Some("Today's mess menu"));
        assert_eq!(suggestion(5), Some("Available cab pools"));
        assert_eq!(suggestion(0), None);
        assert_eq!(suggestion(6), None);
    }
}
