//! The `Allocator` and its per-step drain loop.
//!
//! # Per-carrier assignment
//!
//! For each free carrier, while the backlog is non-empty:
//!
//! ```text
//! ① candidate = backlog front
//! ② a formation for some other item is stale → dissolve, re-queue members
//! ③ weight tier of candidate
//!      over capacity → AllocError::OverCapacity (nothing is mutated)
//! ④ candidate → carrier's hand
//!      individual → pop candidate
//!      group      → join/create formation; pop candidate once complete
//! ⑤ candidate popped → first individually-liftable item → tube
//! ⑥ individual → dispatch carrier
//!    group complete → dispatch every member, drop formation
//!    otherwise → carrier waits inside the formation
//! ```
//!
//! # Free-set bookkeeping
//!
//! Three collections keep iteration and mutation apart: the pass drains a
//! snapshot of `free`; carriers that found nothing to do go straight back to
//! `free`; carriers released by a dissolution go to `requeue`, which is merged
//! into `free` before the next pass.  The step ends on the first pass that
//! leaves `requeue` empty.

use mr_core::{CarrierId, CarryCapacity, MailItem, WeightTier};

use crate::{AllocError, AllocObserver, AllocResult, Backlog, Fleet, GroupFormation};

// ── Step output ───────────────────────────────────────────────────────────────

/// One carrier leaving the mailroom.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Dispatch {
    pub carrier:    CarrierId,
    pub hand:       MailItem,
    pub tube:       Option<MailItem>,
    /// Number of carriers lifting `hand` together; 1 for individual loads.
    pub group_size: usize,
}

/// What one call to [`Allocator::step`] did.
#[derive(Clone, Debug, Default)]
pub struct StepReport {
    /// Dispatches in the order they happened.
    pub dispatches:   Vec<Dispatch>,
    /// Formations cancelled by a more urgent item.
    pub dissolutions: usize,
    /// Carriers left waiting in an incomplete formation at the end of the step.
    pub waiting:      Vec<CarrierId>,
}

impl StepReport {
    pub fn dispatched_carriers(&self) -> impl Iterator<Item = CarrierId> + '_ {
        self.dispatches.iter().map(|d| d.carrier)
    }

    pub fn is_idle(&self) -> bool {
        self.dispatches.is_empty() && self.dissolutions == 0 && self.waiting.is_empty()
    }
}

/// How the hand assignment of one carrier ended.
enum HandOutcome {
    /// Lifted alone; candidate left the backlog.
    Alone,
    /// This carrier completed a formation; candidate left the backlog.
    GroupComplete,
    /// Formation still short of members; candidate stays queued.
    Waiting,
}

// ── Allocator ─────────────────────────────────────────────────────────────────

/// Assigns waiting mail to free carriers, one step at a time.
///
/// Owns the backlog, the free-carrier set, and the (at most one) pending
/// [`GroupFormation`].  Carriers themselves live behind a [`Fleet`] passed
/// into every [`step`](Self::step).
#[derive(Clone, Debug, Default)]
pub struct Allocator {
    capacity:  CarryCapacity,
    backlog:   Backlog,
    /// Carriers available for work, in registration order.
    free:      Vec<CarrierId>,
    /// Carriers released by a dissolution, merged into `free` before the next pass.
    requeue:   Vec<CarrierId>,
    formation: Option<GroupFormation>,
}

impl Allocator {
    pub fn new(capacity: CarryCapacity) -> Self {
        Self { capacity, ..Self::default() }
    }

    // ── Driver interface ──────────────────────────────────────────────────

    /// Queue a newly arrived item.  Always succeeds; weight is only checked
    /// when the item reaches the front.
    pub fn add_item(&mut self, item: MailItem) {
        self.backlog.insert(item);
    }

    /// Make `carrier` available for assignment from the next step on.
    ///
    /// The carrier must be empty and not already free or waiting in a
    /// formation.
    pub fn register_free(&mut self, carrier: CarrierId) {
        debug_assert!(!self.free.contains(&carrier), "{carrier} is already free");
        debug_assert!(!self.requeue.contains(&carrier), "{carrier} is already re-queued");
        debug_assert!(
            !self.formation.as_ref().is_some_and(|g| g.contains(carrier)),
            "{carrier} is waiting in a formation"
        );
        self.free.push(carrier);
    }

    /// Assign as many free carriers as the backlog allows.
    ///
    /// Free carriers are served first-registered, first-served.  A carrier
    /// that finds the backlog empty stays free for the next step.
    ///
    /// # Errors
    ///
    /// [`AllocError::OverCapacity`] if the backlog front is heavier than a full
    /// group can lift.  The item stays queued, the carrier being served and
    /// every carrier not yet reached stay free, and carriers released by an
    /// earlier dissolution in this step are kept for re-queueing.
    pub fn step<F: Fleet, O: AllocObserver>(
        &mut self,
        fleet:    &mut F,
        observer: &mut O,
    ) -> AllocResult<StepReport> {
        let mut report = StepReport::default();

        loop {
            self.free.append(&mut self.requeue);
            let mut draining = std::mem::take(&mut self.free).into_iter();

            while let Some(carrier) = draining.next() {
                if self.backlog.is_empty() {
                    self.free.push(carrier);
                    continue;
                }
                if let Err(e) = self.load_carrier(carrier, fleet, observer, &mut report) {
                    self.free.push(carrier);
                    self.free.extend(draining);
                    return Err(e);
                }
            }

            if self.requeue.is_empty() {
                break;
            }
        }

        report.waiting = self
            .formation
            .as_ref()
            .map(|g| g.members().to_vec())
            .unwrap_or_default();
        Ok(report)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn backlog(&self) -> &Backlog {
        &self.backlog
    }

    /// Carriers that will be served by the next step, in order.
    pub fn free_carriers(&self) -> &[CarrierId] {
        &self.free
    }

    /// Carriers released by a dissolution and not yet merged back into the
    /// free set (only non-empty after a failed step).
    pub fn pending_requeue(&self) -> &[CarrierId] {
        &self.requeue
    }

    /// The formation currently gathering carriers, if any.
    pub fn formation(&self) -> Option<&GroupFormation> {
        self.formation.as_ref()
    }

    // ── Per-carrier assignment ────────────────────────────────────────────

    fn load_carrier<F: Fleet, O: AllocObserver>(
        &mut self,
        carrier:  CarrierId,
        fleet:    &mut F,
        observer: &mut O,
        report:   &mut StepReport,
    ) -> AllocResult<()> {
        debug_assert!(fleet.is_unloaded(carrier), "{carrier} must be empty before loading");

        let Some(&candidate) = self.backlog.front() else {
            return Ok(());
        };

        // A formation for anything other than the current front has been
        // overtaken by a more urgent arrival.
        if let Some(stale) = self.formation.take_if(|g| !g.item().same_item(&candidate)) {
            let item = stale.item().id;
            let released = stale.dissolve(fleet);
            observer.on_dissolved(item, &released);
            report.dissolutions += 1;
            self.requeue.extend(released);
        }

        let outcome = match self.capacity.tier(candidate.weight) {
            WeightTier::OverCapacity => {
                return Err(AllocError::OverCapacity {
                    item:   candidate.id,
                    weight: candidate.weight,
                    max:    self.capacity.max(),
                });
            }
            WeightTier::Individual => {
                fleet.load_hand(carrier, candidate);
                self.backlog.pop_front();
                HandOutcome::Alone
            }
            WeightTier::Group { required } => {
                fleet.load_hand(carrier, candidate);
                let group = self
                    .formation
                    .get_or_insert_with(|| GroupFormation::create(carrier, candidate, required, fleet));
                group.add_carrier(carrier);
                fleet.mark_in_group(carrier);
                observer.on_group_joined(carrier, group);

                if group.is_complete() {
                    self.backlog.pop_front();
                    HandOutcome::GroupComplete
                } else {
                    HandOutcome::Waiting
                }
            }
        };

        let tube = match outcome {
            HandOutcome::Waiting => None,
            HandOutcome::Alone | HandOutcome::GroupComplete => self.fill_tube(carrier, fleet),
        };

        match outcome {
            HandOutcome::Alone => {
                fleet.dispatch(carrier);
                let dispatch = Dispatch { carrier, hand: candidate, tube, group_size: 1 };
                observer.on_dispatch(&dispatch);
                report.dispatches.push(dispatch);
            }
            HandOutcome::GroupComplete => {
                let members = self.formation.take().map(GroupFormation::into_members).unwrap_or_default();
                let group_size = members.len();
                for member in members {
                    fleet.dispatch(member);
                    let dispatch = Dispatch {
                        carrier: member,
                        hand:    candidate,
                        tube:    if member == carrier { tube } else { None },
                        group_size,
                    };
                    observer.on_dispatch(&dispatch);
                    report.dispatches.push(dispatch);
                }
            }
            HandOutcome::Waiting => {}
        }

        Ok(())
    }

    /// Move the first individually-liftable item (scanning from the front)
    /// into `carrier`'s tube.  Greedy: a lighter, less urgent item is taken
    /// even if a heavier, more urgent one sits ahead of it.
    fn fill_tube<F: Fleet>(&mut self, carrier: CarrierId, fleet: &mut F) -> Option<MailItem> {
        let capacity = self.capacity;
        let at = self.backlog.position(|item| capacity.is_individual(item.weight))?;
        let item = self.backlog.remove_at(at)?;
        fleet.load_tube(carrier, item);
        Some(item)
    }
}
