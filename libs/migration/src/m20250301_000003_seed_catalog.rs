use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(
            r#"
            INSERT INTO categories (id, code, name)
            VALUES
                ('0195a1b0-0000-7000-8000-000000000001', 'CLOTHING', 'Clothing'),
                ('0195a1b0-0000-7000-8000-000000000002', 'SHOES', 'Shoes'),
                ('0195a1b0-0000-7000-8000-000000000003', 'ACCESSORIES', 'Accessories')
            ON CONFLICT (code) DO NOTHING
            "#,
        )
        .await?;

        db.execute_unprepared(
            r#"
            INSERT INTO products (id, code, price, category_id)
            VALUES
                ('0195a1b0-0001-7000-8000-000000000001', 'PROD001', 10.99, '0195a1b0-0000-7000-8000-000000000001'),
                ('0195a1b0-0001-7000-8000-000000000002', 'PROD002', 12.49, '0195a1b0-0000-7000-8000-000000000002'),
                ('0195a1b0-0001-7000-8000-000000000003', 'PROD003', 8.75, '0195a1b0-0000-7000-8000-000000000003'),
                ('0195a1b0-0001-7000-8000-000000000004', 'PROD004', 15.00, '0195a1b0-0000-7000-8000-000000000001'),
                ('0195a1b0-0001-7000-8000-000000000005', 'PROD005', 20.50, '0195a1b0-0000-7000-8000-000000000002'),
                ('0195a1b0-0001-7000-8000-000000000006', 'PROD006', 5.99, '0195a1b0-0000-7000-8000-000000000003'),
                ('0195a1b0-0001-7000-8000-000000000007', 'PROD007', 7.25, '0195a1b0-0000-7000-8000-000000000001'),
                ('0195a1b0-0001-7000-8000-000000000008', 'PROD008', 13.99, NULL)
            ON CONFLICT (code) DO NOTHING
            "#,
        )
        .await?;

        db.execute_unprepared(
            r#"
            INSERT INTO variants (id, product_id, name, sku, price)
            VALUES
                ('0195a1b0-0002-7000-8000-000000000001', '0195a1b0-0001-7000-8000-000000000001', 'Variant A', 'SKU001A', 11.99),
                ('0195a1b0-0002-7000-8000-000000000002', '0195a1b0-0001-7000-8000-000000000001', 'Variant B', 'SKU001B', 0),
                ('0195a1b0-0002-7000-8000-000000000003', '0195a1b0-0001-7000-8000-000000000002', 'Variant A', 'SKU002A', 13.49),
                ('0195a1b0-0002-7000-8000-000000000004', '0195a1b0-0001-7000-8000-000000000004', 'Variant A', 'SKU004A', 0),
                ('0195a1b0-0002-7000-8000-000000000005', '0195a1b0-0001-7000-8000-000000000005', 'Variant A', 'SKU005A', 21.50),
                ('0195a1b0-0002-7000-8000-000000000006', '0195a1b0-0001-7000-8000-000000000005', 'Variant B', 'SKU005B', 22.50)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // Variants go with their products via ON DELETE CASCADE
        db.execute_unprepared(
            "DELETE FROM products WHERE id::text LIKE '0195a1b0-0001-7000-8000-%'",
        )
        .await?;
        db.execute_unprepared(
            "DELETE FROM categories WHERE id::text LIKE '0195a1b0-0000-7000-8000-%'",
        )
        .await?;

        Ok(())
    }
}
