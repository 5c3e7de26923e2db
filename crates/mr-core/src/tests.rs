//! Unit tests for mr-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CarrierId, Floor, ItemId};

    #[test]
    fn index_roundtrip() {
        let id = CarrierId(42);
        assert_eq!(id.index(), 42);
    }

    #[test]
    fn display() {
        assert_eq!(ItemId(7).to_string(), "ItemId(7)");
    }

    #[test]
    fn floor_distance_is_symmetric() {
        assert_eq!(Floor(3).distance(Floor(10)), 7);
        assert_eq!(Floor(10).distance(Floor(3)), 7);
        assert_eq!(Floor::MAILROOM.distance(Floor(4)), 4);
    }
}

#[cfg(test)]
mod item {
    use crate::{Floor, ItemId, MailItem, Priority, Tick};

    #[test]
    fn ordinary_mail_gets_default_priority() {
        let item = MailItem::new(ItemId(0), Floor(3), 200, Tick(0));
        assert!(!item.is_priority());
        assert_eq!(item.priority(), Priority::DEFAULT);
    }

    #[test]
    fn explicit_priority_wins() {
        let item = MailItem::new(ItemId(0), Floor(3), 200, Tick(0)).with_priority(100);
        assert!(item.is_priority());
        assert_eq!(item.priority(), Priority(100));
        assert!(item.priority() > Priority::DEFAULT);
    }

    #[test]
    fn lowest_explicit_level_ties_with_ordinary_mail() {
        let ordinary = MailItem::new(ItemId(0), Floor(3), 200, Tick(0));
        let lowest = MailItem::new(ItemId(1), Floor(3), 200, Tick(0)).with_priority(1);
        assert_eq!(lowest.priority(), ordinary.priority());
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "below P1")]
    fn level_zero_is_rejected() {
        let _ = MailItem::new(ItemId(0), Floor(3), 200, Tick(0)).with_priority(0);
    }

    #[test]
    fn identity_ignores_payload() {
        let a = MailItem::new(ItemId(1), Floor(3), 200, Tick(0));
        let twin = MailItem::new(ItemId(2), Floor(3), 200, Tick(0));
        assert!(!a.same_item(&twin));
        let copy = a;
        assert!(a.same_item(&copy));
    }
}

#[cfg(test)]
mod capacity {
    use crate::{CarryCapacity, WeightTier};

    #[test]
    fn tiers_use_inclusive_upper_bounds() {
        let cap = CarryCapacity::default();
        assert_eq!(cap.tier(0), WeightTier::Individual);
        assert_eq!(cap.tier(2_000), WeightTier::Individual);
        assert_eq!(cap.tier(2_001), WeightTier::Group { required: 2 });
        assert_eq!(cap.tier(2_600), WeightTier::Group { required: 2 });
        assert_eq!(cap.tier(2_601), WeightTier::Group { required: 3 });
        assert_eq!(cap.tier(3_000), WeightTier::Group { required: 3 });
        assert_eq!(cap.tier(3_001), WeightTier::OverCapacity);
    }

    #[test]
    fn default_is_valid() {
        assert!(CarryCapacity::default().validate().is_ok());
        assert_eq!(CarryCapacity::default().max(), 3_000);
    }

    #[test]
    fn rejects_non_increasing_tiers() {
        let zero = CarryCapacity { individual: 0, pair: 10, triple: 20 };
        assert!(zero.validate().is_err());

        let flat = CarryCapacity { individual: 10, pair: 10, triple: 20 };
        assert!(flat.validate().is_err());

        let shrinking = CarryCapacity { individual: 10, pair: 20, triple: 15 };
        assert!(shrinking.validate().is_err());
    }

    #[test]
    fn pair_equal_to_triple_never_needs_three() {
        let cap = CarryCapacity { individual: 10, pair: 20, triple: 20 };
        assert!(cap.validate().is_ok());
        assert_eq!(cap.tier(20), WeightTier::Group { required: 2 });
        assert_eq!(cap.tier(21), WeightTier::OverCapacity);
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn arithmetic() {
        assert_eq!(Tick(5) + 2, Tick(7));
        assert_eq!(Tick(5).next(), Tick(6));
        assert_eq!(Tick(9).since(Tick(4)), 5);
        assert_eq!(Tick(4).since(Tick(9)), 0);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(12).to_string(), "T12");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        for _ in 0..32 {
            assert_eq!(a.gen_range(0u32..1_000), b.gen_range(0u32..1_000));
        }
    }

    #[test]
    fn children_are_deterministic() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        let mut ca = a.child(1);
        let mut cb = b.child(1);
        assert_eq!(ca.gen_range(0u64..u64::MAX), cb.gen_range(0u64..u64::MAX));
    }

    #[test]
    fn gen_bool_extremes() {
        let mut r = SimRng::new(1);
        assert!(!r.gen_bool(0.0));
        assert!(r.gen_bool(1.0));
        assert!(r.gen_bool(2.0)); // clamped
    }

    #[test]
    fn choose_empty_is_none() {
        let mut r = SimRng::new(1);
        let empty: [u32; 0] = [];
        assert!(r.choose(&empty).is_none());
        assert_eq!(r.choose(&[5]), Some(&5));
    }
}
