//! Order Service - Business logic layer
//!
//! Order creation performs the cross-domain referential checks: the client
//! must exist, and every item must name an existing product with a positive
//! quantity. Checks run item by item and abort at the first failure, so a
//! partially valid order is never persisted.

use std::sync::Arc;
use tracing::instrument;

use domain_clients::ClientRepository;
use domain_products::ProductRepository;

use crate::error::{OrderError, OrderResult};
use crate::models::{ClientOrder, CreateOrder, Order};
use crate::repository::OrderRepository;
use crate::stats::{OrderTotals, OrderValue, TopClient, TopProduct};

/// Order service providing business logic and statistics operations
pub struct OrderService<R, C, P>
where
    R: OrderRepository,
    C: ClientRepository,
    P: ProductRepository,
{
    repository: Arc<R>,
    clients: Arc<C>,
    products: Arc<P>,
}

impl<R, C, P> OrderService<R, C, P>
where
    R: OrderRepository,
    C: ClientRepository,
    P: ProductRepository,
{
    /// Create a new OrderService over the three repositories
    pub fn new(repository: R, clients: C, products: P) -> Self {
        Self {
            repository: Arc::new(repository),
            clients: Arc::new(clients),
            products: Arc::new(products),
        }
    }

    /// Create a new order after validating all references
    #[instrument(skip(self, input), fields(client_id = %input.client_id))]
    pub async fn create_order(&self, input: CreateOrder) -> OrderResult<Order> {
        if !self.clients.exists(&input.client_id).await? {
            return Err(OrderError::ClientNotFound(input.client_id));
        }

        for item in &input.items {
            if !self.products.exists(&item.product_id).await? {
                return Err(OrderError::ProductNotFound(item.product_id.clone()));
            }

            if item.quantity < 1 {
                return Err(OrderError::Validation(format!(
                    "Invalid quantity {} for product {}",
                    item.quantity, item.product_id
                )));
            }
        }

        self.repository.create(input).await
    }

    /// List a client's orders, with the client ID stripped from each record
    #[instrument(skip(self))]
    pub async fn list_client_orders(&self, client_id: &str) -> OrderResult<Vec<ClientOrder>> {
        if !self.clients.exists(client_id).await? {
            return Err(OrderError::ClientNotFound(client_id.to_string()));
        }

        let orders = self.repository.list_by_client(client_id).await?;
        Ok(orders.into_iter().map(Into::into).collect())
    }

    /// Top 10 clients by number of orders
    #[instrument(skip(self))]
    pub async fn top_clients(&self) -> OrderResult<Vec<TopClient>> {
        self.repository.top_clients().await
    }

    /// Top 10 products by total ordered quantity
    #[instrument(skip(self))]
    pub async fn top_products(&self) -> OrderResult<Vec<TopProduct>> {
        self.repository.top_products().await
    }

    /// Total number of orders
    #[instrument(skip(self))]
    pub async fn total_orders(&self) -> OrderResult<OrderTotals> {
        let total = self.repository.count().await?;
        Ok(OrderTotals { total })
    }

    /// Combined value of all orders at current product prices
    #[instrument(skip(self))]
    pub async fn total_order_value(&self) -> OrderResult<OrderValue> {
        let total_value = self.repository.total_value().await?;
        Ok(OrderValue { total_value })
    }
}

impl<R, C, P> Clone for OrderService<R, C, P>
where
    R: OrderRepository,
    C: ClientRepository,
    P: ProductRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clients: Arc::clone(&self.clients),
            products: Arc::clone(&self.products),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderItem;
    use crate::repository::MockOrderRepository;
    use async_trait::async_trait;
    use domain_clients::{Client, ClientResult, RegisterClient};
    use domain_products::{Product, ProductFilter, ProductResult, RegisterProduct};
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        ClientRepo {}

        #[async_trait]
        impl ClientRepository for ClientRepo {
            async fn create(&self, input: RegisterClient) -> ClientResult<Client>;
            async fn get_by_id(&self, id: &str) -> ClientResult<Option<Client>>;
            async fn delete(&self, id: &str) -> ClientResult<bool>;
            async fn exists(&self, id: &str) -> ClientResult<bool>;
        }
    }

    mock! {
        ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn create(&self, input: RegisterProduct) -> ProductResult<Product>;
            async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>>;
            async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>>;
            async fn delete(&self, id: &str) -> ProductResult<bool>;
            async fn exists(&self, id: &str) -> ProductResult<bool>;
        }
    }

    fn create_input(items: Vec<OrderItem>) -> CreateOrder {
        CreateOrder {
            client_id: "c1".to_string(),
            items,
        }
    }

    fn item(product_id: &str, quantity: i64) -> OrderItem {
        OrderItem {
            product_id: product_id.to_string(),
            quantity,
        }
    }

    fn service_with(
        orders: MockOrderRepository,
        clients: MockClientRepo,
        products: MockProductRepo,
    ) -> OrderService<MockOrderRepository, MockClientRepo, MockProductRepo> {
        OrderService::new(orders, clients, products)
    }

    #[tokio::test]
    async fn test_create_order_success() {
        let mut orders = MockOrderRepository::new();
        orders.expect_create().times(1).returning(|input| {
            Ok(Order {
                id: "ord1".to_string(),
                client_id: input.client_id,
                items: input.items,
            })
        });

        let mut clients = MockClientRepo::new();
        clients
            .expect_exists()
            .with(eq("c1"))
            .returning(|_| Ok(true));

        let mut products = MockProductRepo::new();
        products
            .expect_exists()
            .with(eq("p1"))
            .returning(|_| Ok(true));

        let service = service_with(orders, clients, products);
        let order = service
            .create_order(create_input(vec![item("p1", 2)]))
            .await
            .unwrap();
        assert_eq!(order.id, "ord1");
        assert_eq!(order.items.len(), 1);
    }

    #[tokio::test]
    async fn test_create_order_unknown_client() {
        let mut orders = MockOrderRepository::new();
        orders.expect_create().times(0);

        let mut clients = MockClientRepo::new();
        clients
            .expect_exists()
            .with(eq("c1"))
            .returning(|_| Ok(false));

        let products = MockProductRepo::new();

        let service = service_with(orders, clients, products);
        let result = service.create_order(create_input(vec![item("p1", 2)])).await;
        assert!(matches!(result, Err(OrderError::ClientNotFound(id)) if id == "c1"));
    }

    #[tokio::test]
    async fn test_create_order_unknown_product() {
        let mut orders = MockOrderRepository::new();
        orders.expect_create().times(0);

        let mut clients = MockClientRepo::new();
        clients.expect_exists().returning(|_| Ok(true));

        let mut products = MockProductRepo::new();
        products
            .expect_exists()
            .with(eq("missing"))
            .returning(|_| Ok(false));

        let service = service_with(orders, clients, products);
        let result = service
            .create_order(create_input(vec![item("missing", 2)]))
            .await;
        assert!(matches!(result, Err(OrderError::ProductNotFound(id)) if id == "missing"));
    }

    #[tokio::test]
    async fn test_create_order_zero_quantity() {
        let mut orders = MockOrderRepository::new();
        orders.expect_create().times(0);

        let mut clients = MockClientRepo::new();
        clients.expect_exists().returning(|_| Ok(true));

        let mut products = MockProductRepo::new();
        products.expect_exists().returning(|_| Ok(true));

        let service = service_with(orders, clients, products);
        let result = service.create_order(create_input(vec![item("p1", 0)])).await;
        assert!(matches!(result, Err(OrderError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_order_aborts_at_first_bad_item() {
        // The second item never gets its product checked once the first
        // item fails on quantity.
        let mut orders = MockOrderRepository::new();
        orders.expect_create().times(0);

        let mut clients = MockClientRepo::new();
        clients.expect_exists().returning(|_| Ok(true));

        let mut products = MockProductRepo::new();
        products
            .expect_exists()
            .with(eq("p1"))
            .times(1)
            .returning(|_| Ok(true));
        products.expect_exists().with(eq("p2")).times(0);

        let service = service_with(orders, clients, products);
        let result = service
            .create_order(create_input(vec![item("p1", 0), item("p2", 1)]))
            .await;
        assert!(matches!(result, Err(OrderError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_order_empty_items() {
        let mut orders = MockOrderRepository::new();
        orders.expect_create().times(1).returning(|input| {
            Ok(Order {
                id: "ord1".to_string(),
                client_id: input.client_id,
                items: input.items,
            })
        });

        let mut clients = MockClientRepo::new();
        clients.expect_exists().returning(|_| Ok(true));

        let products = MockProductRepo::new();

        let service = service_with(orders, clients, products);
        let order = service.create_order(create_input(vec![])).await.unwrap();
        assert!(order.items.is_empty());
    }

    #[tokio::test]
    async fn test_list_client_orders_strips_client_id() {
        let mut orders = MockOrderRepository::new();
        orders
            .expect_list_by_client()
            .with(eq("c1"))
            .returning(|_| {
                Ok(vec![Order {
                    id: "ord1".to_string(),
                    client_id: "c1".to_string(),
                    items: vec![],
                }])
            });

        let mut clients = MockClientRepo::new();
        clients.expect_exists().returning(|_| Ok(true));

        let products = MockProductRepo::new();

        let service = service_with(orders, clients, products);
        let listed = service.list_client_orders("c1").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "ord1");
    }

    #[tokio::test]
    async fn test_list_client_orders_unknown_client() {
        let mut orders = MockOrderRepository::new();
        orders.expect_list_by_client().times(0);

        let mut clients = MockClientRepo::new();
        clients.expect_exists().returning(|_| Ok(false));

        let products = MockProductRepo::new();

        let service = service_with(orders, clients, products);
        let result = service.list_client_orders("missing").await;
        assert!(matches!(result, Err(OrderError::ClientNotFound(_))));
    }

    #[tokio::test]
    async fn test_top_clients_passthrough() {
        let mut orders = MockOrderRepository::new();
        orders.expect_top_clients().returning(|| {
            Ok(vec![TopClient {
                client_id: "c1".to_string(),
                total_orders: 5,
            }])
        });

        let service = service_with(orders, MockClientRepo::new(), MockProductRepo::new());
        let top = service.top_clients().await.unwrap();
        assert_eq!(top[0].total_orders, 5);
    }

    #[tokio::test]
    async fn test_total_orders() {
        let mut orders = MockOrderRepository::new();
        orders.expect_count().returning(|| Ok(3));

        let service = service_with(orders, MockClientRepo::new(), MockProductRepo::new());
        let totals = service.total_orders().await.unwrap();
        assert_eq!(totals.total, 3);
    }

    #[tokio::test]
    async fn test_total_order_value_empty_store_is_zero() {
        let mut orders = MockOrderRepository::new();
        orders.expect_total_value().returning(|| Ok(0.0));

        let service = service_with(orders, MockClientRepo::new(), MockProductRepo::new());
        let value = service.total_order_value().await.unwrap();
        assert_eq!(value.total_value, 0.0);
    }
}
