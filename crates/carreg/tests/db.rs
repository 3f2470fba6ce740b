mod support;

use carreg::{CarPatch, Column, Db, Filter, Pagination};
use carreg_core::{
    driver::Operation,
    filter::{Operator, Union},
    Predicate, Value,
};
use pretty_assertions::assert_eq;
use support::{car, MemoryDriver};

async fn setup() -> (Db, MemoryDriver) {
    let driver = MemoryDriver::new();
    let db = Db::new(driver.clone()).await.unwrap();
    (db, driver)
}

#[tokio::test]
async fn add_and_get() {
    let (db, _) = setup().await;

    let inserted = db
        .add_cars(vec![car("A001AA77", "Lada", 2002), car("B002BB77", "Kia", 2015)])
        .await
        .unwrap();
    assert_eq!(inserted, 2);

    let fetched = db.get_car(2).await.unwrap();
    assert_eq!(fetched.reg_num, "B002BB77");
    assert_eq!(fetched.id, 2);
}

#[tokio::test]
async fn duplicate_reg_nums_are_skipped() {
    let (db, driver) = setup().await;

    db.add_cars(vec![car("A001AA77", "Lada", 2002)]).await.unwrap();
    let inserted = db
        .add_cars(vec![car("A001AA77", "Lada", 2002), car("C003CC77", "Kia", 2010)])
        .await
        .unwrap();

    assert_eq!(inserted, 1);
    assert_eq!(driver.cars().len(), 2);
}

#[tokio::test]
async fn get_missing_is_not_found() {
    let (db, _) = setup().await;

    let err = db.get_car(99).await.unwrap_err();
    assert!(err.is_record_not_found());
}

#[tokio::test]
async fn list_compiles_filter_and_pagination() {
    let (db, driver) = setup().await;
    db.add_cars(vec![
        car("A001AA77", "Lada", 2002),
        car("B002BB77", "Lada", 2012),
        car("C003CC77", "Kia", 2015),
    ])
    .await
    .unwrap();

    let filter = Filter::from(vec![
        Predicate::eq(Column::Mark, "Lada"),
        Predicate::new(Union::And, Column::Year, Operator::Gt, "2005"),
    ]);
    let cars = db
        .list_cars(filter, Pagination::new(10, 0))
        .await
        .unwrap();

    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].reg_num, "B002BB77");

    let (sql, params) = driver.exec_log().last_sql().unwrap();
    assert!(sql.ends_with(r#"WHERE "mark" = $1 AND "year" > $2 LIMIT $3 OFFSET $4;"#));
    assert_eq!(
        params,
        vec![
            Value::from("Lada"),
            Value::from("2005"),
            Value::I64(10),
            Value::I64(0)
        ]
    );
}

#[tokio::test]
async fn or_binds_looser_than_and() {
    let (db, _) = setup().await;
    db.add_cars(vec![
        car("A001AA77", "Lada", 2002),
        car("B002BB77", "Kia", 2012),
        car("C003CC77", "Kia", 1999),
    ])
    .await
    .unwrap();

    // mark = Lada OR (mark = Kia AND year < 2000)
    let filter = Filter::from(vec![
        Predicate::eq(Column::Mark, "Lada"),
        Predicate::new(Union::Or, Column::Mark, Operator::Eq, "Kia"),
        Predicate::new(Union::And, Column::Year, Operator::Lt, "2000"),
    ]);
    let mut reg_nums: Vec<_> = db
        .list_cars(filter, Pagination::NONE)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.reg_num)
        .collect();
    reg_nums.sort();

    assert_eq!(reg_nums, ["A001AA77", "C003CC77"]);
}

#[tokio::test]
async fn offset_is_honored() {
    let (db, _) = setup().await;
    db.add_cars(
        (1..=5)
            .map(|i| car(&format!("A00{i}AA77"), "Lada", 2000))
            .collect(),
    )
    .await
    .unwrap();

    let cars = db
        .list_cars(Filter::new(), Pagination::new(2, 3))
        .await
        .unwrap();

    let ids: Vec<_> = cars.iter().map(|c| c.id).collect();
    assert_eq!(ids, [4, 5]);
}

#[tokio::test]
async fn update_and_delete() {
    let (db, driver) = setup().await;
    db.add_cars(vec![car("A001AA77", "Lada", 2002)]).await.unwrap();

    db.update_car(1, CarPatch::default().mark("Kia").year(2003))
        .await
        .unwrap();
    let updated = db.get_car(1).await.unwrap();
    assert_eq!((updated.mark.as_str(), updated.year), ("Kia", 2003));

    db.delete_car(1).await.unwrap();
    assert!(driver.cars().is_empty());
    assert!(db.delete_car(1).await.unwrap_err().is_record_not_found());
}

#[tokio::test]
async fn empty_patch_never_reaches_the_store() {
    let (db, driver) = setup().await;
    db.add_cars(vec![car("A001AA77", "Lada", 2002)]).await.unwrap();
    let log = driver.exec_log();
    log.clear();

    let err = db.update_car(1, CarPatch::default()).await.unwrap_err();

    assert!(err.is_no_fields_to_update());
    assert_eq!(log.count(|op| matches!(op, Operation::UpdateById(_))), 0);
}

#[tokio::test]
async fn update_to_taken_reg_num_conflicts() {
    let (db, _) = setup().await;
    db.add_cars(vec![car("A001AA77", "Lada", 2002), car("B002BB77", "Kia", 2010)])
        .await
        .unwrap();

    let err = db
        .update_car(2, CarPatch::default().reg_num("A001AA77"))
        .await
        .unwrap_err();

    assert!(err.is_already_exists());
}

#[tokio::test]
async fn reset_db_clears_records() {
    let (db, driver) = setup().await;
    db.add_cars(vec![car("A001AA77", "Lada", 2002)]).await.unwrap();

    db.reset_db().await.unwrap();

    assert!(driver.cars().is_empty());
}

#[tokio::test]
async fn pool_size_is_configurable() {
    let db = Db::builder()
        .max_pool_size(3)
        .build(MemoryDriver::new())
        .await
        .unwrap();

    // A handle works through clones sharing the same pool.
    let clone = db.clone();
    clone
        .add_cars(vec![car("A001AA77", "Lada", 2002)])
        .await
        .unwrap();
    assert_eq!(db.get_car(1).await.unwrap().reg_num, "A001AA77");
}
