// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

use std::collections::HashMap;

use crossbeam_channel::{Receiver, Sender, unbounded};
use parking_lot::RwLock;

use crate::id::{ColumnId, TableId};

/// A committed catalog mutation, scoped to one table.
///
/// Changes are eventually-consistent refresh triggers for other sessions;
/// they carry ids, not definitions, so receivers re-read the catalog.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CatalogChange {
	TableCreated {
		table: TableId,
	},
	TableUpdated {
		table: TableId,
	},
	TableDeleted {
		table: TableId,
	},
	ColumnCreated {
		table: TableId,
		column: ColumnId,
	},
	ColumnUpdated {
		table: TableId,
		column: ColumnId,
	},
	ColumnDeleted {
		table: TableId,
		column: ColumnId,
	},
}

impl CatalogChange {
	pub fn table(&self) -> TableId {
		match self {
			CatalogChange::TableCreated {
				table,
			}
			| CatalogChange::TableUpdated {
				table,
			}
			| CatalogChange::TableDeleted {
				table,
			}
			| CatalogChange::ColumnCreated {
				table,
				..
			}
			| CatalogChange::ColumnUpdated {
				table,
				..
			}
			| CatalogChange::ColumnDeleted {
				table,
				..
			} => *table,
		}
	}
}

/// Fans committed changes out to per-table subscribers.
///
/// Sends never block and never fail the mutation; a disconnected receiver is
/// pruned on the next send to its table.
pub(crate) struct Notifier {
	subscribers: RwLock<HashMap<TableId, Vec<Sender<CatalogChange>>>>,
}

impl Notifier {
	pub(crate) fn new() -> Self {
		Self {
			subscribers: RwLock::new(HashMap::new()),
		}
	}

	pub(crate) fn subscribe(&self, table: TableId) -> Receiver<CatalogChange> {
		let (sender, receiver) = unbounded();
		self.subscribers.write().entry(table).or_default().push(sender);
		receiver
	}

	pub(crate) fn notify(&self, change: CatalogChange) {
		let mut subscribers = self.subscribers.write();
		if let Some(senders) = subscribers.get_mut(&change.table()) {
			senders.retain(|sender| sender.send(change).is_ok());
			if senders.is_empty() {
				subscribers.remove(&change.table());
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_subscribers_only_see_their_table() {
		let notifier = Notifier::new();
		let first = notifier.subscribe(TableId(1));
		let second = notifier.subscribe(TableId(2));

		notifier.notify(CatalogChange::TableUpdated {
			table: TableId(1),
		});

		assert_eq!(first.try_recv().unwrap(), CatalogChange::TableUpdated {
			table: TableId(1)
		});
		assert!(second.try_recv().is_err());
	}

	#[test]
	fn test_disconnected_receiver_is_pruned() {
		let notifier = Notifier::new();
		let receiver = notifier.subscribe(TableId(1));
		drop(receiver);

		// must not fail or block
		notifier.notify(CatalogChange::TableDeleted {
			table: TableId(1),
		});
		assert!(notifier.subscribers.read().get(&TableId(1)).is_none());
	}

	#[test]
	fn test_change_reports_its_table() {
		let change = CatalogChange::ColumnCreated {
			table: TableId(4),
			column: ColumnId(7),
		};
		assert_eq!(change.table(), TableId(4));
	}
}
