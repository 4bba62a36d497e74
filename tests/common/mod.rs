//! Shared fixtures: the two real page shards produced by the sample
//! project's documentation build, embedded verbatim in script form.
#![allow(dead_code)]

use pagesearch::{Entry, IndexBuilder, SearchIndex, shard};

/// The leading-letter 'e' shard.
pub const SHARD_E: &str = r#"var searchData=
[
  ['efficient_20matrix_20product_20expressions_0',['Writing efficient matrix product expressions',['../TopicWritingEfficientProductExpression.html',1,'UnclassifiedPages']]],
  ['eigen_1',['eigen',['../Experimental.html',1,'Experimental parts of Eigen'],['../TopicEigenExpressionTemplates.html',1,'Expression templates in Eigen'],['../UserManual_CustomizingEigen.html',1,'Extending/Customizing Eigen'],['../UserManual_UnderstandingEigen.html',1,'Understanding Eigen'],['../TopicUsingBlasLapack.html',1,'Using BLAS/LAPACK from Eigen'],['../TopicUsingIntelMKL.html',1,'Using Intel® MKL from Eigen']]],
  ['eigen_20and_20multi_20threading_2',['Eigen and multi-threading',['../TopicMultiThreading.html',1,'UserManual_Generalities']]],
  ['eigen_20ci_20infrastructure_3',['Eigen CI infrastructure',['../md_build_2Desktop__Qt__5__15__18__GCC__64bit-Debug_2project__eigen-prefix_2src_2project__eigen_2ci_2README.html',1,'']]],
  ['eigen_20in_20cmake_20projects_4',['Using Eigen in CMake Projects',['../TopicCMakeGuide.html',1,'UserManual_Generalities']]],
  ['eigen_20in_20cuda_20kernels_5',['Using Eigen in CUDA kernels',['../TopicCUDA.html',1,'UserManual_Generalities']]],
  ['eigen_20on_20a_20simple_20example_6',['What happens inside Eigen, on a simple example',['../TopicInsideEigenExample.html',1,'UserManual_UnderstandingEigen']]],
  ['eigen_20sycl_20backend_7',['Eigen SYCL Backend',['../SYCL_EIGEN.html',1,'index']]],
  ['eigen_20tensors_8',['Eigen Tensors',['../eigen_tensors.html',1,'']]],
  ['eigen_20types_20as_20parameters_9',['Writing Functions Taking Eigen Types as Parameters',['../TopicFunctionTakingEigenTypes.html',1,'UserManual_Generalities']]],
  ['evaluation_20and_20aliasing_10',['Lazy Evaluation and Aliasing',['../TopicLazyEvaluation.html',1,'UserManual_UnderstandingEigen']]],
  ['example_11',['What happens inside Eigen, on a simple example',['../TopicInsideEigenExample.html',1,'UserManual_UnderstandingEigen']]],
  ['experimental_20parts_20of_20eigen_12',['Experimental parts of Eigen',['../Experimental.html',1,'UnclassifiedPages']]],
  ['expression_20templates_20in_20eigen_13',['Expression templates in Eigen',['../TopicEigenExpressionTemplates.html',1,'UnclassifiedPages']]],
  ['expression_20type_14',['Adding a new expression type',['../TopicNewExpressionType.html',1,'UserManual_CustomizingEigen']]],
  ['expressions_15',['expressions',['../TopicCustomizing_NullaryExpr.html',1,'Matrix manipulation via nullary-expressions'],['../TopicWritingEfficientProductExpression.html',1,'Writing efficient matrix product expressions']]],
  ['extending_20customizing_20eigen_16',['Extending/Customizing Eigen',['../UserManual_CustomizingEigen.html',1,'index']]],
  ['extending_20matrixbase_20and_20other_20classes_17',['Extending MatrixBase (and other classes)',['../TopicCustomizing_Plugins.html',1,'UserManual_CustomizingEigen']]]
];
"#;

/// The leading-letter 't' shard.
pub const SHARD_T: &str = r#"var searchData=
[
  ['taking_20eigen_20types_20as_20parameters_0',['Writing Functions Taking Eigen Types as Parameters',['../TopicFunctionTakingEigenTypes.html',1,'UserManual_Generalities']]],
  ['template_20and_20typename_20keywords_20in_20c_1',['The template and typename keywords in C++',['../TopicTemplateKeyword.html',1,'UserManual_Generalities']]],
  ['templates_20in_20eigen_2',['Expression templates in Eigen',['../TopicEigenExpressionTemplates.html',1,'UnclassifiedPages']]],
  ['tensors_3',['Eigen Tensors',['../eigen_tensors.html',1,'']]],
  ['the_20class_20hierarchy_4',['The class hierarchy',['../TopicClassHierarchy.html',1,'UserManual_UnderstandingEigen']]],
  ['the_20template_20and_20typename_20keywords_20in_20c_5',['The template and typename keywords in C++',['../TopicTemplateKeyword.html',1,'UserManual_Generalities']]],
  ['threading_6',['Eigen and multi-threading',['../TopicMultiThreading.html',1,'UserManual_Generalities']]],
  ['tinyobjloader_7',['tinyobjloader',['../md_build_2Desktop__Qt__5__15__18__GCC__64bit-Debug_2project__bullet-prefix_2src_2project__bullet7eb2ce34a46893b6d01357f9d502540b.html',1,'']]],
  ['todo_20list_8',['Todo List',['../todo.html',1,'']]],
  ['topics_9',['General topics',['../UserManual_Generalities.html',1,'index']]],
  ['tutorialsparse_5fexample_5fdetails_10',['TutorialSparse_example_details',['../TutorialSparse_example_details.html',1,'UnclassifiedPages']]],
  ['type_11',['Adding a new expression type',['../TopicNewExpressionType.html',1,'UserManual_CustomizingEigen']]],
  ['typename_20keywords_20in_20c_12',['The template and typename keywords in C++',['../TopicTemplateKeyword.html',1,'UserManual_Generalities']]],
  ['types_13',['types',['../TopicScalarTypes.html',1,'Scalar types'],['../TopicCustomizing_CustomScalar.html',1,'Using custom scalar types']]],
  ['types_20as_20parameters_14',['Writing Functions Taking Eigen Types as Parameters',['../TopicFunctionTakingEigenTypes.html',1,'UserManual_Generalities']]]
];
"#;

/// Entries of both shards in shard order ('e' before 't').
pub fn sample_entries() -> Vec<Entry> {
    let mut entries = shard::parse_script(SHARD_E).expect("e shard parses");
    entries.extend(shard::parse_script(SHARD_T).expect("t shard parses"));
    entries
}

/// An index over the union of both shards.
pub fn sample_index() -> SearchIndex {
    IndexBuilder::new()
        .build(sample_entries())
        .expect("sample shards build")
}
