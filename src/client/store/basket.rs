use crate::model::basket::BasketDto;

/// Latest basket snapshot returned by the server.
///
/// Every basket request replaces the whole snapshot, so all subscribers render the
/// same state the server holds.
#[derive(Clone, Default)]
pub struct BasketState {
    pub basket: BasketDto,
    pub fetched: bool,
}

impl BasketState {
    pub fn replace(&mut self, basket: BasketDto) {
        self.basket = basket;
        self.fetched = true;
    }

    pub fn clear(&mut self) {
        self.basket = BasketDto::default();
    }
}
