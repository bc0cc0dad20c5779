use fimine::fp::build_fp_tree;
use fimine::{
    pipeline, Algorithm, Apriori, Eclat, FpGrowth, MinSupport, Miner, NoopMonitor, RunConfig,
};
use std::collections::BTreeSet;
use std::io::Write;

fn normalized(
    algorithm: Algorithm,
    transactions: &[Vec<&'static str>],
    min_support_count: usize,
) -> BTreeSet<Vec<&'static str>> {
    algorithm.mine(transactions, min_support_count).to_set()
}

fn set_of(itemsets: &[&[&'static str]]) -> BTreeSet<Vec<&'static str>> {
    itemsets.iter().map(|itemset| itemset.to_vec()).collect()
}

#[test]
fn small_basket_agrees_across_engines() {
    let transactions = vec![vec!["a", "b"], vec!["a", "b", "c"], vec!["a"], vec!["b", "c"]];

    // {b, c} occurs in the second and fourth transactions, so it is frequent too
    let expected = set_of(&[&["a"], &["b"], &["c"], &["a", "b"], &["b", "c"]]);
    for algorithm in Algorithm::ALL {
        assert_eq!(normalized(algorithm, &transactions, 2), expected, "{}", algorithm);
    }

    let singles: Vec<(Vec<&str>, usize)> = Apriori
        .mine(&transactions, 2)
        .into_pairs()
        .into_iter()
        .filter(|(itemset, _)| itemset.len() == 1)
        .collect();
    assert_eq!(singles, vec![(vec!["a"], 3), (vec!["b"], 3), (vec!["c"], 2)]);
}

#[test]
fn empty_dataset_gives_nothing() {
    let transactions: Vec<Vec<&str>> = Vec::new();
    assert!(Apriori.mine(&transactions, 1).is_empty());
    assert!(Eclat.mine(&transactions, 1).is_empty());
    assert!(FpGrowth.mine(&transactions, 1).is_empty());
}

#[test]
fn threshold_above_transaction_count_gives_nothing() {
    let transactions = vec![vec!["a", "b"], vec!["a", "b"], vec!["a"]];
    for algorithm in Algorithm::ALL {
        assert!(algorithm.mine(&transactions, 4).is_empty(), "{}", algorithm);
    }
}

#[test]
fn zero_threshold_mines_like_one() {
    let transactions = vec![vec!["a"], vec!["b"]];
    for algorithm in Algorithm::ALL {
        let pairs = algorithm.mine(&transactions, 0).into_pairs();
        assert_eq!(pairs, vec![(vec!["a"], 1), (vec!["b"], 1)], "{}", algorithm);
        assert_eq!(algorithm.mine(&transactions, 0), algorithm.mine(&transactions, 1));
    }
}

#[test]
fn fp_tree_shares_common_prefix() {
    let transactions = vec![vec!["a", "b", "c"], vec!["a", "b"], vec!["a"], vec!["b", "c"]];
    let weighted = transactions.iter().map(|tx| (tx.as_slice(), 1usize));
    let tree = build_fp_tree(weighted, 1, &NoopMonitor).unwrap();

    let a = tree.child(tree.root_index, &"a").unwrap();
    let b = tree.child(a, &"b").unwrap();
    assert_eq!(tree.nodes[a].children.len(), 1);
    assert_eq!(tree.nodes[b].count, 2);
    assert_eq!(tree.nodes[b].parent, Some(a));
}

#[test]
fn supports_are_exact() {
    let transactions = vec![
        vec!["bread", "milk"],
        vec!["bread", "diapers", "beer", "eggs"],
        vec!["milk", "diapers", "beer", "cola"],
        vec!["bread", "milk", "diapers", "beer"],
        vec!["bread", "milk", "diapers", "cola"],
    ];
    for algorithm in Algorithm::ALL {
        let result = algorithm.mine(&transactions, 3);
        for (itemset, support) in result.iter() {
            let rescanned = fimine::count_support(&transactions, itemset);
            assert_eq!(support, rescanned, "{} {:?}", algorithm, itemset);
        }
        assert!(result
            .iter()
            .any(|(itemset, support)| itemset == ["beer", "diapers"] && support == 3));
    }
}

#[test]
fn pipeline_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("transactions.txt");
    let mut file = std::fs::File::create(&input).unwrap();
    writeln!(file, "a b").unwrap();
    writeln!(file, "a b c").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "a").unwrap();
    writeln!(file, "b c").unwrap();
    writeln!(file, "z").unwrap();
    drop(file);

    let config = RunConfig::new(&input)
        .with_algorithm(Algorithm::Apriori)
        .with_min_support(MinSupport::Count(2))
        .with_sample_size(Some(4));
    let summary = pipeline::run(&config).unwrap();

    assert_eq!(summary.sample_size, 4);
    assert_eq!(summary.itemset_count, 5);
    assert_eq!(summary.report_path, dir.path().join("apriori_result.txt"));

    let report = std::fs::read_to_string(&summary.report_path).unwrap();
    assert!(report.contains("Sample size: 4 transactions"));
    assert!(report.contains("Itemset: ['a', 'b'], Support: 0.500, Count: 2"));
    assert!(report.contains("Total number of frequent itemsets: 5"));
    assert!(report.contains("Candidate Count: 3"));
}

#[test]
fn pipeline_rejects_invalid_threshold() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("transactions.txt");
    std::fs::write(&input, "a b\n").unwrap();

    let config = RunConfig::new(&input).with_min_support(MinSupport::Count(0));
    let err = pipeline::run(&config).unwrap_err();
    assert!(matches!(err, fimine::Error::InvalidThreshold(_)));
}
