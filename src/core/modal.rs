use crate::domain::model::Tariff;

/// The lead modal, open for a tariff or closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalState {
    tariff: Option<Tariff>,
}

impl ModalState {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn open(self, tariff: Tariff) -> Self {
        Self {
            tariff: Some(tariff),
        }
    }

    pub fn close(self) -> Self {
        Self { tariff: None }
    }

    pub fn is_open(&self) -> bool {
        self.tariff.is_some()
    }

    pub fn tariff(&self) -> Option<Tariff> {
        self.tariff
    }

    pub fn title(&self) -> Option<String> {
        self.tariff
            .map(|t| format!("Обрати тариф: {}", t.display_name()))
    }
}
