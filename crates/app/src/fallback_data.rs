//! Static substitute datasets shown whenever live data is unavailable within
//! the timeout bound.

use chrono::{DateTime, TimeZone, Utc};
use shared_types::{
    Bill, BillStatus, DietPlan, FeePackage, Meal, Member, MemberStatus, Notification,
    NotificationKind, Supplement,
};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}

pub fn fallback_packages() -> Vec<FeePackage> {
    vec![
        FeePackage {
            id: "pkg-1".into(),
            name: "Basic".into(),
            duration_months: 1,
            price: 999,
            features: vec![
                "Gym Access".into(),
                "Locker Room".into(),
                "Water Station".into(),
            ],
        },
        FeePackage {
            id: "pkg-2".into(),
            name: "Standard".into(),
            duration_months: 3,
            price: 2499,
            features: vec![
                "All Basic Features".into(),
                "Group Classes".into(),
                "Personal Trainer (2 sessions)".into(),
            ],
        },
        FeePackage {
            id: "pkg-3".into(),
            name: "Premium".into(),
            duration_months: 6,
            price: 4499,
            features: vec![
                "All Standard Features".into(),
                "Sauna Access".into(),
                "Diet Consultation".into(),
                "Unlimited PT Sessions".into(),
            ],
        },
        FeePackage {
            id: "pkg-4".into(),
            name: "Elite".into(),
            duration_months: 12,
            price: 7999,
            features: vec![
                "All Premium Features".into(),
                "Supplement Discounts".into(),
                "Priority Booking".into(),
                "Guest Passes (4/month)".into(),
            ],
        },
    ]
}

pub fn fallback_members() -> Vec<Member> {
    vec![
        Member {
            id: "mem-1".into(),
            name: "John Smith".into(),
            email: "john@example.com".into(),
            phone: "+1 234 567 890".into(),
            address: "123 Main St, City".into(),
            join_date: date(2024, 1, 15),
            package_id: "pkg-3".into(),
            status: MemberStatus::Active,
            avatar: None,
        },
        Member {
            id: "mem-2".into(),
            name: "Sarah Johnson".into(),
            email: "sarah@example.com".into(),
            phone: "+1 234 567 891".into(),
            address: "456 Oak Ave, Town".into(),
            join_date: date(2024, 2, 20),
            package_id: "pkg-2".into(),
            status: MemberStatus::Active,
            avatar: None,
        },
        Member {
            id: "mem-3".into(),
            name: "Mike Wilson".into(),
            email: "mike@example.com".into(),
            phone: "+1 234 567 892".into(),
            address: "789 Pine Rd, Village".into(),
            join_date: date(2023, 12, 1),
            package_id: "pkg-4".into(),
            status: MemberStatus::Active,
            avatar: None,
        },
        Member {
            id: "mem-4".into(),
            name: "Emily Brown".into(),
            email: "emily@example.com".into(),
            phone: "+1 234 567 893".into(),
            address: "321 Elm St, District".into(),
            join_date: date(2024, 3, 10),
            package_id: "pkg-1".into(),
            status: MemberStatus::Expired,
            avatar: None,
        },
    ]
}

pub fn fallback_bills() -> Vec<Bill> {
    vec![
        Bill {
            id: "bill-1".into(),
            member_id: "mem-1".into(),
            member_name: "John Smith".into(),
            package_id: "pkg-3".into(),
            package_name: "Premium".into(),
            amount: 4499,
            paid_date: date(2024, 1, 15),
            due_date: date(2024, 7, 15),
            status: BillStatus::Paid,
        },
        Bill {
            id: "bill-2".into(),
            member_id: "mem-2".into(),
            member_name: "Sarah Johnson".into(),
            package_id: "pkg-2".into(),
            package_name: "Standard".into(),
            amount: 2499,
            paid_date: date(2024, 2, 20),
            due_date: date(2024, 5, 20),
            status: BillStatus::Paid,
        },
        Bill {
            id: "bill-3".into(),
            member_id: "mem-3".into(),
            member_name: "Mike Wilson".into(),
            package_id: "pkg-4".into(),
            package_name: "Elite".into(),
            amount: 7999,
            paid_date: date(2023, 12, 1),
            due_date: date(2024, 12, 1),
            status: BillStatus::Pending,
        },
        Bill {
            id: "bill-4".into(),
            member_id: "mem-4".into(),
            member_name: "Emily Brown".into(),
            package_id: "pkg-1".into(),
            package_name: "Basic".into(),
            amount: 999,
            paid_date: date(2024, 3, 10),
            due_date: date(2024, 4, 10),
            status: BillStatus::Overdue,
        },
    ]
}

pub fn fallback_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "notif-1".into(),
            title: "Fee Reminder".into(),
            message: "Your membership fee is due in 5 days.".into(),
            kind: NotificationKind::FeeReminder,
            created_at: date(2024, 7, 10),
            read: false,
        },
        Notification {
            id: "notif-2".into(),
            title: "Gym Closure".into(),
            message: "The gym will be closed on December 25th for Christmas.".into(),
            kind: NotificationKind::Info,
            created_at: date(2024, 7, 9),
            read: true,
        },
        Notification {
            id: "notif-3".into(),
            title: "New Class Added".into(),
            message: "We've added a new Yoga class every Saturday at 9 AM.".into(),
            kind: NotificationKind::Success,
            created_at: date(2024, 7, 8),
            read: false,
        },
    ]
}

pub fn fallback_supplements() -> Vec<Supplement> {
    vec![
        Supplement {
            id: "sup-1".into(),
            name: "Whey Protein Isolate".into(),
            description: "High-quality protein powder for muscle recovery".into(),
            price: 2499,
            category: "Protein".into(),
            stock: 45,
            image: Some(
                "https://images.unsplash.com/photo-1579722821273-0f6c7d44362f?auto=format&fit=crop&q=80&w=400"
                    .into(),
            ),
        },
        Supplement {
            id: "sup-2".into(),
            name: "Creatine Monohydrate".into(),
            description: "Pure creatine for strength and power".into(),
            price: 999,
            category: "Performance".into(),
            stock: 78,
            image: Some(
                "https://images.unsplash.com/photo-1593095948071-474c5cc2989d?auto=format&fit=crop&q=80&w=400"
                    .into(),
            ),
        },
        Supplement {
            id: "sup-3".into(),
            name: "BCAA Powder".into(),
            description: "Branched-chain amino acids for endurance".into(),
            price: 1499,
            category: "Recovery".into(),
            stock: 32,
            image: Some(
                "https://images.unsplash.com/photo-1517836357463-d25dfeac3438?auto=format&fit=crop&q=80&w=400"
                    .into(),
            ),
        },
        Supplement {
            id: "sup-4".into(),
            name: "Pre-Workout Formula".into(),
            description: "Energy boost for intense workouts".into(),
            price: 1999,
            category: "Energy".into(),
            stock: 56,
            image: Some(
                "https://images.unsplash.com/photo-1546483875-ad9014c88eba?auto=format&fit=crop&q=80&w=400"
                    .into(),
            ),
        },
    ]
}

pub fn fallback_diet_plans() -> Vec<DietPlan> {
    vec![
        DietPlan {
            id: "diet-1".into(),
            name: "Muscle Building".into(),
            description: "High protein diet for muscle growth".into(),
            calories: 3000,
            meals: vec![
                Meal {
                    name: "Breakfast".into(),
                    items: vec!["6 Egg Whites".into(), "Oatmeal".into(), "Banana".into()],
                    time: "7:00 AM".into(),
                },
                Meal {
                    name: "Lunch".into(),
                    items: vec![
                        "Grilled Chicken".into(),
                        "Brown Rice".into(),
                        "Vegetables".into(),
                    ],
                    time: "12:00 PM".into(),
                },
                Meal {
                    name: "Snack".into(),
                    items: vec!["Protein Shake".into(), "Almonds".into()],
                    time: "4:00 PM".into(),
                },
                Meal {
                    name: "Dinner".into(),
                    items: vec!["Salmon".into(), "Sweet Potato".into(), "Broccoli".into()],
                    time: "7:00 PM".into(),
                },
            ],
        },
        DietPlan {
            id: "diet-2".into(),
            name: "Fat Loss".into(),
            description: "Calorie deficit diet for weight loss".into(),
            calories: 1800,
            meals: vec![
                Meal {
                    name: "Breakfast".into(),
                    items: vec!["Greek Yogurt".into(), "Berries".into(), "Green Tea".into()],
                    time: "8:00 AM".into(),
                },
                Meal {
                    name: "Lunch".into(),
                    items: vec!["Grilled Fish".into(), "Salad".into(), "Quinoa".into()],
                    time: "1:00 PM".into(),
                },
                Meal {
                    name: "Dinner".into(),
                    items: vec!["Lean Turkey".into(), "Vegetables".into(), "Avocado".into()],
                    time: "6:00 PM".into(),
                },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_datasets_are_non_empty() {
        assert!(!fallback_members().is_empty());
        assert!(!fallback_bills().is_empty());
        assert!(!fallback_packages().is_empty());
        assert!(!fallback_notifications().is_empty());
        assert!(!fallback_supplements().is_empty());
        assert!(!fallback_diet_plans().is_empty());
    }

    #[test]
    fn fallback_bills_reference_fallback_members() {
        let member_ids: Vec<String> = fallback_members().into_iter().map(|m| m.id).collect();
        for bill in fallback_bills() {
            assert!(member_ids.contains(&bill.member_id));
        }
    }

    #[test]
    fn fallback_members_reference_real_packages() {
        let package_ids: Vec<String> = fallback_packages().into_iter().map(|p| p.id).collect();
        for member in fallback_members() {
            assert!(package_ids.contains(&member.package_id));
        }
    }
}
